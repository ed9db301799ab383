//! Event log endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::{blocking, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::projection::recent_first;
use crate::types::PresenceEvent;

/// GET /api/events - Parsed events, newest first
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<PresenceEvent>>>> {
    let events = recent_first(blocking(move || Ok(state.store.load_events()?)).await?);
    let total = events.len();

    Ok(Json(ApiResponse::with_total(events, total)))
}
