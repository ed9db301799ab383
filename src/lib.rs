//! Beacon Presence Monitor
//!
//! Ingests presence events from BLE scanning stations into an append-only text
//! log and serves views derived from it on every read.
//!
//! # Modules
//!
//! - `types`: Core data structures (PresenceEvent, Session, BeaconStatus)
//! - `event_store`: Append-only log plus backup, restore and clear
//! - `projection`: Session reconstruction, duration statistics, beacon and room status
//! - `api`: Axum router for ingestion, read views and management
//! - `config`: Environment configuration
//! - `utils`: Timestamps and atomic file replacement
//!
//! # Example
//!
//! ```no_run
//! use beacon_presence::event_store::{EventStore, EventStoreConfig};
//! use beacon_presence::projection::{DurationReport, StatusBoard};
//! use beacon_presence::types::RawRecord;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EventStore::new(EventStoreConfig::default());
//!     store.append(&RawRecord::new("2025-01-01 09:00:00", "Room 1", "DETECTED", "B1"))?;
//!
//!     let events = store.load_events()?;
//!     let board = StatusBoard::from_events(&events);
//!     let report = DurationReport::build(&events, "B1");
//!     println!("{} beacons, {} visits", board.len(), report.stats.total_visits);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod event_store;
pub mod projection;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{EventStoreError, EventStoreResult};
pub use event_store::{BackupInfo, BackupManager, EventStore, EventStoreConfig};
pub use projection::{DurationReport, DurationStats, RoomOccupancy, SessionReplay, StatusBoard};
pub use types::{BeaconStatus, EventKind, Presence, PresenceEvent, RawRecord, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
