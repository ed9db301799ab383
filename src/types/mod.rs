//! Data types for the beacon presence monitor
//!
//! Events are the only persisted data. Sessions and beacon statuses are
//! derived views, recomputed from the event log on every read.

mod event;
mod session;
mod status;

pub use event::{EventKind, PresenceEvent, RawRecord, DEFAULT_ROOM, FIELD_DELIMITER};
pub use session::Session;
pub use status::{BeaconStatus, Presence};
