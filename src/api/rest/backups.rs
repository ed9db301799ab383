//! Backup, restore and clear endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use super::{blocking, ApiError, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::event_store::BackupInfo;

/// GET /api/backups - Available backups, oldest first
pub async fn list_backups(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<BackupInfo>>>> {
    let backups = blocking(move || Ok(state.backups.list_backups()?)).await?;
    let total = backups.len();

    Ok(Json(ApiResponse::with_total(backups, total)))
}

/// POST /api/backups - Back up the active log
///
/// 201 with the new backup, or 200 with `null` when there is no log yet.
pub async fn create_backup(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Option<BackupInfo>>>)> {
    let backup = blocking(move || {
        let _guard = state.management.lock();
        Ok(state.backups.create_backup()?)
    })
    .await?;

    let status = if backup.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(ApiResponse::new(backup))))
}

/// Outcome of a restore
#[derive(Debug, Serialize)]
pub struct Restored {
    pub restored: String,
}

/// POST /api/backups/:name/restore - Replace the active log with a backup
pub async fn restore_backup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApiResponse<Restored>>> {
    let restored = blocking(move || {
        restore(&state, &name)?;
        Ok(Restored { restored: name })
    })
    .await?;

    Ok(Json(ApiResponse::new(restored)))
}

/// POST /api/clear - Back up, then empty the active log
pub async fn clear_logs(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Option<BackupInfo>>>> {
    let backup = blocking(move || {
        let _guard = state.management.lock();
        Ok(state.backups.clear_all(&state.store)?)
    })
    .await?;

    Ok(Json(ApiResponse::new(backup)))
}

/// Management form as posted by the dashboard
#[derive(Debug, Deserialize)]
pub struct ManageForm {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub file: String,
}

/// Result of a management form action
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ManageOutcome {
    ClearAll { backup: Option<BackupInfo> },
    Backup { backup: Option<BackupInfo> },
    Restore { restored: String },
}

/// POST /clear - Dispatch `clear_all`, `backup` or `restore` (with `file`)
pub async fn manage(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ManageForm>,
) -> ApiResult<Json<ApiResponse<ManageOutcome>>> {
    let outcome = blocking(move || match form.action.as_str() {
        "clear_all" => {
            let _guard = state.management.lock();
            Ok(ManageOutcome::ClearAll {
                backup: state.backups.clear_all(&state.store)?,
            })
        }
        "backup" => {
            let _guard = state.management.lock();
            Ok(ManageOutcome::Backup {
                backup: state.backups.create_backup()?,
            })
        }
        "restore" => {
            restore(&state, &form.file)?;
            Ok(ManageOutcome::Restore {
                restored: form.file,
            })
        }
        other => {
            tracing::warn!(action = %other, "unknown management action");
            Err(ApiError::BadRequest(format!("Unknown action '{}'", other)))
        }
    })
    .await?;

    Ok(Json(ApiResponse::new(outcome)))
}

fn restore(state: &AppState, name: &str) -> ApiResult<()> {
    let _guard = state.management.lock();
    state.backups.restore(name).map_err(|e| {
        tracing::warn!(backup = %name, error = %e, "restore rejected");
        ApiError::from(e)
    })
}
