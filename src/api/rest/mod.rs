//! REST API module for HTTP endpoints
//!
//! - `POST /log` - Scanner ingestion (form encoded)
//! - `GET /api/events` - Event log, newest first
//! - `GET /api/beacons` - Current status per beacon
//! - `GET /api/rooms` - Beacons grouped by current room
//! - `GET /api/duration/:beacon_id` - Visit history and statistics
//! - `GET|POST /api/backups` - List or create backups
//! - `POST /api/backups/:name/restore` - Restore a backup
//! - `POST /api/clear`, `POST /clear` - Log management

pub mod backups;
pub mod beacons;
pub mod duration;
pub mod events;
pub mod ingest;
pub mod rooms;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::event_store::EventStoreError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error type that converts to appropriate HTTP responses
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(#[source] EventStoreError),

    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<EventStoreError> for ApiError {
    fn from(e: EventStoreError) -> Self {
        match e {
            EventStoreError::BackupNotFound(name) => {
                ApiError::NotFound(format!("Backup '{}' not found", name))
            }
            EventStoreError::InvalidBackupName(name) => {
                ApiError::BadRequest(format!("Invalid backup name '{}'", name))
            }
            other => ApiError::Internal(other),
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, error) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Task(err) => {
                tracing::error!(error = %err, "blocking task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error, code })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Run file I/O on the blocking pool so slow disks never stall the runtime
pub(crate) async fn blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}
