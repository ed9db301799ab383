//! Event Store Module
//!
//! - `EventStore`: append-only presence log and line decoding
//! - `BackupManager`: timestamped copies of the log, restore and clear
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌─────────┐    ┌──────────────────────┐
//! │ Scanner │───►│ append line to       │
//! │ POST    │    │ beacon_events.txt    │
//! └─────────┘    └──────────────────────┘
//!
//! Read Path (every request):
//! ┌───────────┐    ┌────────────┐    ┌──────────────────────────┐
//! │ read file │───►│ parse each │───►│ fold into log / status / │
//! │ once      │    │ line       │    │ sessions + durations     │
//! └───────────┘    └────────────┘    └──────────────────────────┘
//! ```

mod backup;
mod store;

pub use crate::error::{EventStoreError, EventStoreResult};
pub use backup::{BackupInfo, BackupManager};
pub use store::{EventStore, EventStoreConfig};
