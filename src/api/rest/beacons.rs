//! Beacon status endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::{blocking, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::projection::StatusBoard;
use crate::types::BeaconStatus;

/// GET /api/beacons - Current status per beacon, in first-seen order
pub async fn list_beacons(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<BeaconStatus>>>> {
    let events = blocking(move || Ok(state.store.load_events()?)).await?;
    let statuses = StatusBoard::from_events(&events).into_statuses();
    let total = statuses.len();

    tracing::debug!(events = events.len(), beacons = total, "projected beacon status");

    Ok(Json(ApiResponse::with_total(statuses, total)))
}
