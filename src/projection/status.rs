//! Per-beacon status projection
//!
//! Folds the whole log into the latest state of every beacon. Listing order
//! is the order in which each beacon was first seen.

use std::collections::HashMap;

use crate::types::{BeaconStatus, EventKind, Presence, PresenceEvent};

/// Insertion-ordered map from beacon id to status
#[derive(Debug, Default)]
pub struct StatusBoard {
    statuses: Vec<BeaconStatus>,
    index: HashMap<String, usize>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a whole event sequence, left to right
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a PresenceEvent>,
    {
        let mut board = Self::new();
        for event in events {
            board.apply(event);
        }
        board
    }

    /// Apply a single event
    ///
    /// Every event overrides `room` and `last_seen`. Only DETECTED and LOST
    /// move `presence`; each DETECTED counts a visit, even while already
    /// present.
    pub fn apply(&mut self, event: &PresenceEvent) {
        let status = self.entry(event);
        status.room = event.room.clone();
        status.last_seen = event.timestamp.clone();

        match event.kind {
            EventKind::Detected => {
                status.presence = Presence::Present;
                status.visit_count += 1;
            }
            EventKind::Lost => status.presence = Presence::Away,
            EventKind::VibrateSent | EventKind::Other(_) => {}
        }
    }

    fn entry(&mut self, event: &PresenceEvent) -> &mut BeaconStatus {
        let pos = match self.index.get(&event.beacon_id) {
            Some(&pos) => pos,
            None => {
                let pos = self.statuses.len();
                self.statuses.push(BeaconStatus::new(
                    event.beacon_id.clone(),
                    event.room.clone(),
                    event.timestamp.clone(),
                ));
                self.index.insert(event.beacon_id.clone(), pos);
                pos
            }
        };
        &mut self.statuses[pos]
    }

    pub fn get(&self, beacon_id: &str) -> Option<&BeaconStatus> {
        self.index.get(beacon_id).map(|&pos| &self.statuses[pos])
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Statuses in first-seen order
    pub fn statuses(&self) -> &[BeaconStatus] {
        &self.statuses
    }

    pub fn into_statuses(self) -> Vec<BeaconStatus> {
        self.statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(ts: &str, room: &str, kind: &str, beacon: &str) -> PresenceEvent {
        PresenceEvent::new(ts, room, EventKind::from(kind), beacon)
    }

    #[test]
    fn test_detected_then_lost() {
        let events = vec![
            ev("t1", "Room A", "DETECTED", "X"),
            ev("t2", "Room A", "LOST", "X"),
            ev("t3", "Room B", "VIBRATE_SENT", "Y"),
        ];

        let board = StatusBoard::from_events(&events);

        let x = board.get("X").unwrap();
        assert_eq!(x.room, "Room A");
        assert_eq!(x.presence, Presence::Away);
        assert_eq!(x.visit_count, 1);
        assert_eq!(x.last_seen, "t2");

        let y = board.get("Y").unwrap();
        assert_eq!(y.presence, Presence::Unknown);
        assert_eq!(y.visit_count, 0);
        assert_eq!(y.room, "Room B");
    }

    #[test]
    fn test_repeated_detected_counts_every_visit() {
        let events = vec![
            ev("t1", "Room A", "DETECTED", "X"),
            ev("t2", "Room B", "DETECTED", "X"),
        ];

        let board = StatusBoard::from_events(&events);

        let x = board.get("X").unwrap();
        assert_eq!(x.presence, Presence::Present);
        assert_eq!(x.visit_count, 2);
        assert_eq!(x.room, "Room B");
    }

    #[test]
    fn test_lost_while_away_is_noop_for_presence() {
        let events = vec![
            ev("t1", "Room A", "LOST", "X"),
            ev("t2", "Room C", "LOST", "X"),
        ];

        let board = StatusBoard::from_events(&events);
        let x = board.get("X").unwrap();
        assert_eq!(x.presence, Presence::Away);
        assert_eq!(x.visit_count, 0);
        assert_eq!(x.room, "Room C");
    }

    #[test]
    fn test_other_kinds_keep_presence() {
        let events = vec![
            ev("t1", "Room A", "DETECTED", "X"),
            ev("t2", "Hallway", "VIBRATE_SENT", "X"),
            ev("t3", "Hallway", "SOMETHING", "X"),
        ];

        let board = StatusBoard::from_events(&events);
        let x = board.get("X").unwrap();
        assert_eq!(x.presence, Presence::Present);
        assert_eq!(x.room, "Hallway");
        assert_eq!(x.last_seen, "t3");
    }

    #[test]
    fn test_first_seen_order() {
        let events = vec![
            ev("t1", "R", "DETECTED", "C"),
            ev("t2", "R", "DETECTED", "A"),
            ev("t3", "R", "LOST", "C"),
            ev("t4", "R", "DETECTED", "B"),
        ];

        let ids: Vec<String> = StatusBoard::from_events(&events)
            .into_statuses()
            .into_iter()
            .map(|s| s.beacon_id)
            .collect();

        assert_eq!(ids, vec!["C", "A", "B"]);
    }
}
