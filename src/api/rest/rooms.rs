//! Room occupancy endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use super::{blocking, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::projection::{room_occupancy, RoomOccupancy, StatusBoard};

/// GET /api/rooms - Beacons grouped by the room of their latest event
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<RoomOccupancy>>>> {
    let events = blocking(move || Ok(state.store.load_events()?)).await?;
    let rooms = room_occupancy(&StatusBoard::from_events(&events));
    let total = rooms.len();

    Ok(Json(ApiResponse::with_total(rooms, total)))
}
