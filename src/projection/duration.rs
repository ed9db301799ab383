//! Visit duration statistics

use serde::Serialize;

use crate::types::{PresenceEvent, Session};
use crate::utils::time::{format_duration, NOT_APPLICABLE};

use super::sessions::sessions_for_beacon;

/// Summary over a beacon's closed sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub total_visits: usize,
    /// Sum of known durations; unknown durations count as zero
    pub total_secs: i64,
    /// `total_secs / total_visits`, truncated; `None` with no visits
    pub average_secs: Option<i64>,
}

impl DurationStats {
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let total_visits = sessions.len();
        let total_secs: i64 = sessions.iter().filter_map(|s| s.duration_secs).sum();
        let average_secs = match total_visits {
            0 => None,
            n => Some(total_secs / n as i64),
        };

        Self {
            total_visits,
            total_secs,
            average_secs,
        }
    }

    pub fn total_display(&self) -> String {
        format_duration(self.total_secs)
    }

    /// Average as displayed, `N/A` with no visits
    pub fn average_display(&self) -> String {
        self.average_secs
            .map(format_duration)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }
}

/// One row of the duration view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    #[serde(flatten)]
    pub session: Session,
    pub duration: String,
}

impl From<Session> for SessionRow {
    fn from(session: Session) -> Self {
        let duration = session.duration_display();
        Self { session, duration }
    }
}

/// Visit history and statistics for one beacon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationReport {
    pub beacon_id: String,
    pub sessions: Vec<SessionRow>,
    pub stats: DurationStats,
    pub total_duration: String,
    pub average_duration: String,
}

impl DurationReport {
    pub fn build(events: &[PresenceEvent], beacon_id: &str) -> Self {
        let sessions = sessions_for_beacon(events, beacon_id);
        let stats = DurationStats::from_sessions(&sessions);

        Self {
            beacon_id: beacon_id.to_string(),
            total_duration: stats.total_display(),
            average_duration: stats.average_display(),
            sessions: sessions.into_iter().map(SessionRow::from).collect(),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;

    fn session_of(secs: Option<i64>) -> Session {
        Session {
            room: "R1".to_string(),
            start: "s".to_string(),
            end: "e".to_string(),
            duration_secs: secs,
        }
    }

    #[test]
    fn test_one_and_two_hours() {
        let stats = DurationStats::from_sessions(&[session_of(Some(3600)), session_of(Some(7200))]);

        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.total_secs, 3 * 3600);
        assert_eq!(stats.average_secs, Some(5400));
        assert_eq!(stats.total_display(), "3:00:00");
        assert_eq!(stats.average_display(), "1:30:00");
    }

    #[test]
    fn test_no_sessions() {
        let stats = DurationStats::from_sessions(&[]);

        assert_eq!(stats.total_visits, 0);
        assert_eq!(stats.average_secs, None);
        assert_eq!(stats.total_display(), "0:00:00");
        assert_eq!(stats.average_display(), "N/A");
    }

    #[test]
    fn test_unknown_duration_counts_as_zero() {
        let stats = DurationStats::from_sessions(&[session_of(None), session_of(Some(61))]);

        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.total_secs, 61);
        // Truncated
        assert_eq!(stats.average_secs, Some(30));
    }

    #[test]
    fn test_report_for_beacon() {
        let events = vec![
            PresenceEvent::new("2025-01-01 10:00:00", "R1", EventKind::Detected, "B1"),
            PresenceEvent::new("2025-01-01 10:00:00", "R9", EventKind::Detected, "B2"),
            PresenceEvent::new("2025-01-01 10:45:00", "R1", EventKind::Lost, "B1"),
            PresenceEvent::new("bad", "R2", EventKind::Detected, "B1"),
            PresenceEvent::new("2025-01-01 11:00:00", "R2", EventKind::Lost, "B1"),
        ];

        let report = DurationReport::build(&events, "B1");

        assert_eq!(report.sessions.len(), 2);
        assert_eq!(report.sessions[0].duration, "0:45:00");
        assert_eq!(report.sessions[1].duration, "?");
        assert_eq!(report.stats.total_visits, 2);
        assert_eq!(report.total_duration, "0:45:00");
        assert_eq!(report.average_duration, "0:22:30");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["beaconId"], "B1");
        assert_eq!(json["sessions"][0]["room"], "R1");
        assert_eq!(json["sessions"][0]["durationSecs"], 2700);
        assert_eq!(json["stats"]["averageSecs"], 1350);
    }
}
