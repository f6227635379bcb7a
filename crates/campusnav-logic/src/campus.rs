//! The campus aggregate — every building and room known to the core.
//!
//! `Campus` is the plain-data snapshot the external store hands over. Rooms
//! refer to buildings by id only, so lookups return `Option` and callers
//! degrade gracefully when a reference dangles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::colors;
use crate::error::FixtureError;
use crate::model::{Building, Room};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Campus {
    pub fn new(buildings: Vec<Building>, rooms: Vec<Room>) -> Self {
        Self { buildings, rooms }
    }

    /// Parse a `{"buildings": [...], "rooms": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn building(&self, id: u32) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Case-insensitive room number lookup.
    pub fn room_by_number(&self, number: &str) -> Option<&Room> {
        let number = number.trim();
        self.rooms
            .iter()
            .find(|r| r.room_number.eq_ignore_ascii_case(number))
    }

    /// The room's building, or `None` when the reference dangles.
    pub fn building_of(&self, room: &Room) -> Option<&Building> {
        self.building(room.building_id)
    }

    /// Fill color for a room: its building's color, or a neutral fallback
    /// for orphaned rooms.
    pub fn room_color(&self, room: &Room) -> &str {
        self.building_of(room)
            .map(|b| b.color.as_str())
            .unwrap_or(colors::DANGLING_BUILDING)
    }

    pub fn rooms_in_building(&self, building_id: u32) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.building_id == building_id)
    }

    pub fn orphaned_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| self.building(r.building_id).is_none())
    }
}
