//! Per-room occupancy projection
//!
//! Groups the beacon status board by each beacon's current room. A beacon
//! belongs to exactly one room: the room of its most recent event.

use serde::Serialize;

use super::StatusBoard;
use crate::types::Presence;

/// Beacons currently attributed to one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancy {
    pub room: String,
    /// Every beacon whose latest event came from this room
    pub total_beacons: usize,
    /// Those of them that are `Present`
    pub active_beacons: usize,
    pub beacon_ids: Vec<String>,
}

impl RoomOccupancy {
    fn empty(room: &str) -> Self {
        Self {
            room: room.to_string(),
            total_beacons: 0,
            active_beacons: 0,
            beacon_ids: Vec::new(),
        }
    }
}

/// Rooms in the order their first listed beacon appears on the board
pub fn room_occupancy(board: &StatusBoard) -> Vec<RoomOccupancy> {
    let mut rooms: Vec<RoomOccupancy> = Vec::new();

    for status in board.statuses() {
        let pos = match rooms.iter().position(|r| r.room == status.room) {
            Some(pos) => pos,
            None => {
                rooms.push(RoomOccupancy::empty(&status.room));
                rooms.len() - 1
            }
        };

        let room = &mut rooms[pos];
        room.total_beacons += 1;
        if status.presence == Presence::Present {
            room.active_beacons += 1;
        }
        room.beacon_ids.push(status.beacon_id.clone());
    }

    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, PresenceEvent};

    fn ev(ts: &str, room: &str, kind: &str, beacon: &str) -> PresenceEvent {
        PresenceEvent::new(ts, room, EventKind::from(kind), beacon)
    }

    #[test]
    fn test_groups_by_current_room() {
        let events = vec![
            ev("t1", "Room 1", "DETECTED", "A"),
            ev("t2", "Room 2", "DETECTED", "B"),
            ev("t3", "Room 1", "DETECTED", "C"),
            ev("t4", "Room 1", "LOST", "C"),
            // A moved on; it no longer counts for Room 1
            ev("t5", "Room 2", "DETECTED", "A"),
        ];

        let rooms = room_occupancy(&StatusBoard::from_events(&events));

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].room, "Room 2");
        assert_eq!(rooms[0].total_beacons, 2);
        assert_eq!(rooms[0].active_beacons, 2);
        assert_eq!(rooms[0].beacon_ids, vec!["A", "B"]);

        assert_eq!(rooms[1].room, "Room 1");
        assert_eq!(rooms[1].total_beacons, 1);
        assert_eq!(rooms[1].active_beacons, 0);
    }

    #[test]
    fn test_unknown_presence_is_not_active() {
        let events = vec![ev("t1", "Hallway", "VIBRATE_SENT", "X")];

        let rooms = room_occupancy(&StatusBoard::from_events(&events));

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].total_beacons, 1);
        assert_eq!(rooms[0].active_beacons, 0);
    }

    #[test]
    fn test_empty_board() {
        assert!(room_occupancy(&StatusBoard::new()).is_empty());
    }
}
