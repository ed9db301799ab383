//! Scanner ingestion endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Form;

use super::{blocking, ApiResult};
use crate::api::state::AppState;
use crate::types::RawRecord;

/// POST /log - Append one scanner event
///
/// Form fields: `timestamp`, `room` (default "Unknown"), `event`, `beacon`.
/// Nothing is validated; the record is written as received.
pub async fn log_event(
    State(state): State<Arc<AppState>>,
    Form(record): Form<RawRecord>,
) -> ApiResult<&'static str> {
    let record = blocking(move || {
        state.store.append(&record)?;
        Ok(record)
    })
    .await?;

    tracing::info!(
        timestamp = %record.timestamp,
        room = %record.room,
        event = %record.event,
        beacon = %record.beacon,
        "event logged"
    );

    Ok("OK")
}
