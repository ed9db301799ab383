//! Session reconstruction
//!
//! Replays one beacon's events in log order and pairs each DETECTED with the
//! next LOST. Only closed sessions are emitted.

use crate::types::{EventKind, PresenceEvent, Session};

/// A DETECTED not yet matched by a LOST
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenSession {
    room: String,
    start: String,
}

/// Single-pass fold from events to closed sessions
///
/// - DETECTED opens a session, silently discarding any session already open.
/// - LOST closes the open session; with nothing open it is ignored.
/// - A session still open when the stream ends is dropped.
///
/// The replay does not look at `beacon_id`; feed it one beacon's events.
#[derive(Debug, Default)]
pub struct SessionReplay {
    open: Option<OpenSession>,
    closed: Vec<Session>,
}

impl SessionReplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single event
    pub fn apply(&mut self, event: &PresenceEvent) {
        match event.kind {
            EventKind::Detected => {
                self.open = Some(OpenSession {
                    room: event.room.clone(),
                    start: event.timestamp.clone(),
                });
            }
            EventKind::Lost => {
                if let Some(open) = self.open.take() {
                    self.closed
                        .push(Session::closed(open.room, open.start, event.timestamp.clone()));
                }
            }
            EventKind::VibrateSent | EventKind::Other(_) => {}
        }
    }

    /// Whether a DETECTED is currently waiting for its LOST
    pub fn has_open_session(&self) -> bool {
        self.open.is_some()
    }

    /// Closed sessions, in the order they were closed
    pub fn into_sessions(self) -> Vec<Session> {
        self.closed
    }
}

/// Reconstruct sessions from one beacon's events
pub fn reconstruct_sessions<'a, I>(events: I) -> Vec<Session>
where
    I: IntoIterator<Item = &'a PresenceEvent>,
{
    let mut replay = SessionReplay::new();
    for event in events {
        replay.apply(event);
    }
    replay.into_sessions()
}

/// Reconstruct sessions for `beacon_id` from the full event log
pub fn sessions_for_beacon(events: &[PresenceEvent], beacon_id: &str) -> Vec<Session> {
    reconstruct_sessions(events.iter().filter(|e| e.beacon_id == beacon_id))
}
