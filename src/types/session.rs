//! Reconstructed visit sessions

use serde::{Deserialize, Serialize};

use crate::utils::time::{format_duration, seconds_between, UNKNOWN_DURATION};

/// A closed visit: a DETECTED matched with the next LOST for the same beacon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub room: String,
    pub start: String,
    pub end: String,
    /// Whole seconds from `start` to `end`; `None` when either timestamp
    /// does not parse
    pub duration_secs: Option<i64>,
}

impl Session {
    /// Close a session, deriving its duration from the two timestamps
    pub fn closed(
        room: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        let start = start.into();
        let end = end.into();
        let duration_secs = seconds_between(&start, &end);

        Self {
            room: room.into(),
            start,
            end,
            duration_secs,
        }
    }

    /// Duration as displayed on the dashboard, `?` when unknown
    pub fn duration_display(&self) -> String {
        match self.duration_secs {
            Some(secs) => format_duration(secs),
            None => UNKNOWN_DURATION.to_string(),
        }
    }
}
