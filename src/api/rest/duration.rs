//! Visit duration endpoint

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use super::{blocking, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::projection::DurationReport;

/// GET /api/duration/:beacon_id - Closed visits and duration statistics
///
/// An unknown beacon yields an empty report rather than 404.
pub async fn get_duration(
    State(state): State<Arc<AppState>>,
    Path(beacon_id): Path<String>,
) -> ApiResult<Json<ApiResponse<DurationReport>>> {
    let events = blocking(move || Ok(state.store.load_events()?)).await?;
    let report = DurationReport::build(&events, &beacon_id);

    Ok(Json(ApiResponse::new(report)))
}
