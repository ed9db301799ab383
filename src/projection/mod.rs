//! Read-side projections over the event log
//!
//! Every view is a pure fold over the full, ordered event sequence. Nothing
//! is cached between requests.
//!
//! - `SessionReplay`: DETECTED/LOST pairs into closed visits
//! - `DurationStats` / `DurationReport`: visit totals and averages
//! - `StatusBoard`: latest status per beacon
//! - `room_occupancy`: beacons grouped by current room
//! - `recent_first`: the raw event log, newest first

mod duration;
mod rooms;
mod sessions;
mod status;

pub use duration::{DurationReport, DurationStats, SessionRow};
pub use rooms::{room_occupancy, RoomOccupancy};
pub use sessions::{reconstruct_sessions, sessions_for_beacon, SessionReplay};
pub use status::StatusBoard;

use crate::types::PresenceEvent;

/// Event log view: the exact reverse of append order
pub fn recent_first(mut events: Vec<PresenceEvent>) -> Vec<PresenceEvent> {
    events.reverse();
    events
}
