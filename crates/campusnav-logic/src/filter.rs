//! Floor and text filtering of the visible room set.
//!
//! The floor selector and search box reduce the campus to what the map
//! draws. Filtering is purely floor/text based: a room whose building
//! reference dangles is still returned.

use std::collections::BTreeSet;

use crate::campus::Campus;
use crate::model::{Building, Room};

/// Case-insensitive substring match on room number or any localized name.
/// Only the empty query matches everything; whitespace is matched literally.
pub fn matches_query(room: &Room, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    room.room_number.to_lowercase().contains(&needle)
        || room
            .names
            .values()
            .any(|name| name.to_lowercase().contains(&needle))
}

/// Rooms on `floor` matching `query`, in insertion order.
pub fn visible_rooms<'a>(rooms: &'a [Room], floor: u32, query: &str) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|r| r.floor == floor && matches_query(r, query))
        .collect()
}

/// Sorted distinct floor numbers across all rooms.
pub fn available_floors(rooms: &[Room]) -> Vec<u32> {
    rooms
        .iter()
        .map(|r| r.floor)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Buildings whose name or any localized name contains `query`.
pub fn visible_buildings<'a>(buildings: &'a [Building], query: &str) -> Vec<&'a Building> {
    let needle = query.to_lowercase();
    buildings
        .iter()
        .filter(|b| {
            needle.is_empty()
                || b.name.to_lowercase().contains(&needle)
                || b.names.values().any(|n| n.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Cached floor list. Rebuilt whenever the `(id, floor)` pairs of the room
/// set differ from the ones it was built from, whichever snapshot they
/// come from.
#[derive(Debug, Clone, Default)]
pub struct FloorIndex {
    floors: Vec<u32>,
    source: Option<Vec<(u32, u32)>>,
}

impl FloorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floors(&mut self, campus: &Campus) -> &[u32] {
        if !self.is_current(&campus.rooms) {
            self.floors = available_floors(&campus.rooms);
            self.source = Some(campus.rooms.iter().map(|r| (r.id, r.floor)).collect());
            log::debug!("Floor index rebuilt: {:?}", self.floors);
        }
        &self.floors
    }

    fn is_current(&self, rooms: &[Room]) -> bool {
        match &self.source {
            Some(source) => {
                source.len() == rooms.len()
                    && source
                        .iter()
                        .zip(rooms)
                        .all(|(&(id, floor), r)| id == r.id && floor == r.floor)
            }
            None => false,
        }
    }
}

/// Floor selector + search box state.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorFilter {
    pub current_floor: u32,
    pub query: String,
}

impl Default for FloorFilter {
    fn default() -> Self {
        Self {
            current_floor: 1,
            query: String::new(),
        }
    }
}

impl FloorFilter {
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        visible_rooms(rooms, self.current_floor, &self.query)
    }

    /// Move to the lowest available floor if the current one disappeared.
    /// Returns whether the floor changed.
    pub fn ensure_valid_floor(&mut self, floors: &[u32]) -> bool {
        match floors.first() {
            Some(&lowest) if !floors.contains(&self.current_floor) => {
                self.current_floor = lowest;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocalizedNames, RoomKind};

    fn make_room(id: u32, number: &str, floor: u32, names: LocalizedNames) -> Room {
        Room {
            id,
            room_number: number.to_string(),
            names,
            floor,
            kind: RoomKind::Classroom,
            capacity: None,
            building_id: 1,
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 50.0,
        }
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            make_room(1, "M12", 1, LocalizedNames::new().with("en", "Mathematics")),
            make_room(2, "K15", 1, LocalizedNames::new().with("ru", "Кафедра физики")),
            make_room(3, "L01", 2, LocalizedNames::new().with("en", "Lecture hall")),
            make_room(4, "M20", 1, LocalizedNames::new()),
            make_room(5, "G03", 3, LocalizedNames::new().with("en", "Gym")),
        ]
    }

    fn ids(rooms: &[&Room]) -> Vec<u32> {
        rooms.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_returns_whole_floor_in_order() {
        let rooms = sample_rooms();
        assert_eq!(ids(&visible_rooms(&rooms, 1, "")), vec![1, 2, 4]);
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let rooms = sample_rooms();
        // Only K15's localized name contains a space
        assert_eq!(ids(&visible_rooms(&rooms, 1, " ")), vec![2]);
        assert!(visible_rooms(&rooms, 1, "M12 ").is_empty());
        assert_eq!(ids(&visible_rooms(&rooms, 2, " ")), vec![3]);
        assert_eq!(ids(&visible_rooms(&rooms, 2, "lecture hall")), vec![3]);
    }

    #[test]
    fn query_matches_room_number_case_insensitive() {
        let rooms = sample_rooms();
        assert_eq!(ids(&visible_rooms(&rooms, 1, "m")), vec![1, 4]);
        assert_eq!(ids(&visible_rooms(&rooms, 1, "k15")), vec![2]);
    }

    #[test]
    fn query_matches_any_localized_name() {
        let rooms = sample_rooms();
        assert_eq!(ids(&visible_rooms(&rooms, 1, "ФИЗИК")), vec![2]);
        assert_eq!(ids(&visible_rooms(&rooms, 1, "mathem")), vec![1]);
    }

    #[test]
    fn query_never_crosses_floors() {
        let rooms = sample_rooms();
        assert!(visible_rooms(&rooms, 1, "lecture").is_empty());
        assert_eq!(ids(&visible_rooms(&rooms, 2, "lecture")), vec![3]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        let rooms = sample_rooms();
        assert!(visible_rooms(&rooms, 1, "zzz").is_empty());
        assert!(visible_rooms(&rooms, 9, "").is_empty());
    }

    #[test]
    fn filtered_is_subset_of_floor() {
        let rooms = sample_rooms();
        let floor = visible_rooms(&rooms, 1, "");
        for q in ["m", "1", "physics", "a", ""] {
            for r in visible_rooms(&rooms, 1, q) {
                assert!(floor.iter().any(|f| f.id == r.id));
            }
        }
    }

    #[test]
    fn floors_sorted_and_distinct() {
        let mut rooms = sample_rooms();
        rooms.push(make_room(6, "B02", 2, LocalizedNames::new()));
        assert_eq!(available_floors(&rooms), vec![1, 2, 3]);
        assert!(available_floors(&[]).is_empty());
    }

    #[test]
    fn floor_index_follows_room_edits() {
        let mut campus = Campus::new(vec![], sample_rooms());
        let mut index = FloorIndex::new();
        assert_eq!(index.floors(&campus), &[1, 2, 3]);

        campus.rooms.push(make_room(6, "T01", 7, LocalizedNames::new()));
        assert_eq!(index.floors(&campus), &[1, 2, 3, 7]);

        campus.rooms[0].floor = 5;
        assert_eq!(index.floors(&campus), &[1, 2, 3, 5, 7]);
    }

    #[test]
    fn floor_index_rebuilds_for_fresh_snapshot() {
        let mut index = FloorIndex::new();
        let first = Campus::new(vec![], vec![make_room(1, "A1", 1, LocalizedNames::new())]);
        assert_eq!(index.floors(&first), &[1]);

        let second = Campus::new(
            vec![],
            vec![
                make_room(10, "L01", 4, LocalizedNames::new()),
                make_room(11, "L02", 4, LocalizedNames::new()),
            ],
        );
        assert_eq!(index.floors(&second), &[4]);
        assert_eq!(index.floors(&first), &[1]);
    }

    #[test]
    fn floor_filter_falls_back_to_lowest_floor() {
        let mut filter = FloorFilter {
            current_floor: 4,
            query: String::new(),
        };
        assert!(filter.ensure_valid_floor(&[1, 2, 3]));
        assert_eq!(filter.current_floor, 1);
        assert!(!filter.ensure_valid_floor(&[1, 2, 3]));
        assert!(!filter.ensure_valid_floor(&[]));
    }

    #[test]
    fn building_search_uses_localized_names() {
        let building = Building {
            id: 1,
            name: "Main".into(),
            names: LocalizedNames::new().with("ru", "Главный корпус"),
            floors: 3,
            capacity: 0,
            color: "#000000".into(),
            x: 0.0,
            y: 0.0,
            shape: crate::model::BuildingShape::Rect {
                width: 10.0,
                height: 10.0,
            },
        };
        let buildings = vec![building];
        assert_eq!(visible_buildings(&buildings, "корпус").len(), 1);
        assert_eq!(visible_buildings(&buildings, "MAIN").len(), 1);
        assert!(visible_buildings(&buildings, "Main ").is_empty());
        assert!(visible_buildings(&buildings, "annex").is_empty());
    }
}
