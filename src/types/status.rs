//! Projected per-beacon status

use serde::{Deserialize, Serialize};

/// Presence state of a beacon
///
/// ```text
/// Unknown --DETECTED--> Present --LOST--> Away --DETECTED--> Present
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Presence {
    /// No DETECTED or LOST seen yet
    #[default]
    Unknown,
    Present,
    Away,
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Presence::Unknown => write!(f, "Unknown"),
            Presence::Present => write!(f, "Present"),
            Presence::Away => write!(f, "Away"),
        }
    }
}

/// Latest known state of one beacon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconStatus {
    pub beacon_id: String,
    /// Room of the most recent event mentioning this beacon, of any kind
    pub room: String,
    pub presence: Presence,
    /// Timestamp of the most recent event
    pub last_seen: String,
    /// Number of DETECTED events, whether or not the visit was ever closed
    pub visit_count: u32,
}

impl BeaconStatus {
    pub fn new(
        beacon_id: impl Into<String>,
        room: impl Into<String>,
        last_seen: impl Into<String>,
    ) -> Self {
        Self {
            beacon_id: beacon_id.into(),
            room: room.into(),
            presence: Presence::Unknown,
            last_seen: last_seen.into(),
            visit_count: 0,
        }
    }
}
