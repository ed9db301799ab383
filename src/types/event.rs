//! Presence event types
//!
//! A presence event is one observation emitted by a scanning station. Events
//! are persisted as one text line each, four fields joined by [`FIELD_DELIMITER`]:
//!
//! ```text
//! 2025-01-01 10:00:00 - Room 1 - DETECTED - fda50693-a4e2-4fb1-afcf-c6eb07647825-1-2
//! ```

use serde::{Deserialize, Serialize};

/// Literal delimiter between the four fields of a persisted record
pub const FIELD_DELIMITER: &str = " - ";

/// Room recorded when a scanner does not report one
pub const DEFAULT_ROOM: &str = "Unknown";

/// Kind of presence observation
///
/// Only `Detected` and `Lost` drive session and status logic. Unrecognised
/// kinds are kept verbatim so the event log shows exactly what was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Beacon came into range of a scanner
    Detected,
    /// Scanner triggered the beacon's vibration motor
    VibrateSent,
    /// Beacon went out of range
    Lost,
    /// Anything else a scanner sent
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Detected => "DETECTED",
            EventKind::VibrateSent => "VIBRATE_SENT",
            EventKind::Lost => "LOST",
            EventKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for EventKind {
    fn from(raw: &str) -> Self {
        match raw {
            "DETECTED" => EventKind::Detected,
            "VIBRATE_SENT" => EventKind::VibrateSent,
            "LOST" => EventKind::Lost,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(EventKind::from(raw.as_str()))
    }
}

/// A decoded presence event
///
/// Timestamps stay as the text the scanner sent; they are only interpreted
/// when a duration is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEvent {
    pub timestamp: String,
    pub room: String,
    pub kind: EventKind,
    pub beacon_id: String,
}

impl PresenceEvent {
    pub fn new(
        timestamp: impl Into<String>,
        room: impl Into<String>,
        kind: EventKind,
        beacon_id: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            room: room.into(),
            kind,
            beacon_id: beacon_id.into(),
        }
    }

    /// Decode one persisted line
    ///
    /// Surrounding whitespace (including the line terminator) is stripped, then
    /// the line is split on [`FIELD_DELIMITER`]. Exactly four fields yield an
    /// event; any other count yields `None`. Empty fields are accepted.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.trim().split(FIELD_DELIMITER);
        let timestamp = fields.next()?;
        let room = fields.next()?;
        let kind = fields.next()?;
        let beacon_id = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self::new(timestamp, room, EventKind::from(kind), beacon_id))
    }

    /// Encode as a persisted line (without terminator)
    pub fn to_line(&self) -> String {
        [
            self.timestamp.as_str(),
            self.room.as_str(),
            self.kind.as_str(),
            self.beacon_id.as_str(),
        ]
        .join(FIELD_DELIMITER)
    }
}

/// Ingestion input as posted by a scanner
///
/// Fields are written verbatim. Nothing is validated here; a record that
/// cannot be decoded later is simply dropped from every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default = "default_room")]
    pub room: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub beacon: String,
}

fn default_room() -> String {
    DEFAULT_ROOM.to_string()
}

impl RawRecord {
    pub fn new(
        timestamp: impl Into<String>,
        room: impl Into<String>,
        event: impl Into<String>,
        beacon: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            room: room.into(),
            event: event.into(),
            beacon: beacon.into(),
        }
    }

    /// The persisted form, newline-terminated
    pub fn to_line(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}\n",
            self.timestamp,
            self.room,
            self.event,
            self.beacon,
            d = FIELD_DELIMITER
        )
    }
}
