//! The persistence collaborator seam.
//!
//! `CampusStore` is what the authoring engine hands finished shapes to. The
//! real implementation lives outside this crate (a document store behind a
//! REST API); `MemoryStore` keeps records in-process for tests and the
//! headless harness.
//!
//! Deleting a building is explicit about its rooms: callers pick a
//! [`DeletePolicy`] instead of silently leaving orphans behind.

use crate::campus::Campus;
use crate::error::{Result, StoreError};
use crate::model::{Building, NewBuilding, NewRoom, Room};

/// What happens to a building's rooms when the building is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Delete dependent rooms along with the building.
    Cascade,
    /// Refuse while any room still references the building.
    RejectIfDependents,
    /// Leave rooms pointing at the deleted id (legacy behaviour).
    Orphan,
}

/// Outcome of a building deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionReport {
    pub building: Building,
    /// Rooms removed by `Cascade`.
    pub removed_rooms: Vec<u32>,
    /// Rooms left dangling by `Orphan`.
    pub orphaned_rooms: Vec<u32>,
}

/// Create/update/delete calls the core makes against the record store.
pub trait CampusStore {
    /// Current snapshot of every stored record.
    fn campus(&self) -> &Campus;

    fn create_building(&mut self, building: NewBuilding) -> Result<Building>;
    fn update_building(&mut self, building: Building) -> Result<Building>;
    fn delete_building(&mut self, id: u32, policy: DeletePolicy) -> Result<DeletionReport>;

    fn create_room(&mut self, room: NewRoom) -> Result<Room>;
    fn update_room(&mut self, room: Room) -> Result<Room>;
    fn delete_room(&mut self, id: u32) -> Result<Room>;

    fn building(&self, id: u32) -> Option<Building> {
        self.campus().building(id).cloned()
    }

    fn room(&self, id: u32) -> Option<Room> {
        self.campus().room(id).cloned()
    }
}

/// In-process store. Assigns ids sequentially and enforces room-number
/// uniqueness and building existence on create.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    campus: Campus,
    next_id: u32,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Campus::default())
    }
}

impl MemoryStore {
    pub fn new(campus: Campus) -> Self {
        let max_id = campus
            .buildings
            .iter()
            .map(|b| b.id)
            .chain(campus.rooms.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Self {
            campus,
            next_id: max_id + 1,
            available: true,
        }
    }

    /// Simulate an outage: every mutating call fails with `Unavailable`.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn into_campus(self) -> Campus {
        self.campus
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn check_room_number(&self, number: &str, except: Option<u32>) -> Result<()> {
        let number = number.trim();
        if number.is_empty() {
            return Err(StoreError::Rejected("room number is empty".into()));
        }
        let taken = self
            .campus
            .rooms
            .iter()
            .any(|r| Some(r.id) != except && r.room_number.trim().eq_ignore_ascii_case(number));
        if taken {
            return Err(StoreError::DuplicateRoomNumber(number.to_string()));
        }
        Ok(())
    }

    fn check_floor(floor: u32) -> Result<()> {
        if floor == 0 {
            return Err(StoreError::Rejected("floor must be 1 or higher".into()));
        }
        Ok(())
    }

    fn check_building_exists(&self, building_id: u32) -> Result<()> {
        if self.campus.building(building_id).is_none() {
            return Err(StoreError::UnknownBuilding(building_id));
        }
        Ok(())
    }
}

impl CampusStore for MemoryStore {
    fn campus(&self) -> &Campus {
        &self.campus
    }

    fn create_building(&mut self, building: NewBuilding) -> Result<Building> {
        self.ensure_available()?;
        if building.name.trim().is_empty() {
            return Err(StoreError::Rejected("building name is empty".into()));
        }
        let id = self.allocate_id();
        let building = building.with_id(id);
        self.campus.buildings.push(building.clone());
        log::info!("Created building #{} ({})", id, building.name);
        Ok(building)
    }

    fn update_building(&mut self, building: Building) -> Result<Building> {
        self.ensure_available()?;
        let slot = self
            .campus
            .buildings
            .iter_mut()
            .find(|b| b.id == building.id)
            .ok_or(StoreError::BuildingNotFound(building.id))?;
        *slot = building.clone();
        log::info!("Updated building #{}", building.id);
        Ok(building)
    }

    fn delete_building(&mut self, id: u32, policy: DeletePolicy) -> Result<DeletionReport> {
        self.ensure_available()?;
        let index = self
            .campus
            .buildings
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BuildingNotFound(id))?;
        let dependents: Vec<u32> = self.campus.rooms_in_building(id).map(|r| r.id).collect();

        let (removed_rooms, orphaned_rooms) = match policy {
            DeletePolicy::RejectIfDependents if !dependents.is_empty() => {
                return Err(StoreError::HasDependents {
                    building_id: id,
                    rooms: dependents.len(),
                });
            }
            DeletePolicy::RejectIfDependents => (vec![], vec![]),
            DeletePolicy::Cascade => {
                self.campus.rooms.retain(|r| r.building_id != id);
                (dependents, vec![])
            }
            DeletePolicy::Orphan => {
                if !dependents.is_empty() {
                    log::warn!(
                        "Deleting building #{} leaves {} rooms without a building",
                        id,
                        dependents.len()
                    );
                }
                (vec![], dependents)
            }
        };

        let building = self.campus.buildings.remove(index);
        log::info!(
            "Deleted building #{} ({} rooms removed)",
            id,
            removed_rooms.len()
        );
        Ok(DeletionReport {
            building,
            removed_rooms,
            orphaned_rooms,
        })
    }

    fn create_room(&mut self, room: NewRoom) -> Result<Room> {
        self.ensure_available()?;
        Self::check_floor(room.floor)?;
        self.check_building_exists(room.building_id)?;
        self.check_room_number(&room.room_number, None)?;
        let id = self.allocate_id();
        let room = room.with_id(id);
        self.campus.rooms.push(room.clone());
        log::info!("Created room {} (#{}) on floor {}", room.room_number, id, room.floor);
        Ok(room)
    }

    fn update_room(&mut self, room: Room) -> Result<Room> {
        self.ensure_available()?;
        let previous_building = self
            .campus
            .room(room.id)
            .map(|r| r.building_id)
            .ok_or(StoreError::RoomNotFound(room.id))?;
        Self::check_floor(room.floor)?;
        // A room whose building was deleted stays editable in place
        if room.building_id != previous_building {
            self.check_building_exists(room.building_id)?;
        }
        self.check_room_number(&room.room_number, Some(room.id))?;
        if let Some(slot) = self.campus.rooms.iter_mut().find(|r| r.id == room.id) {
            *slot = room.clone();
        }
        log::info!("Updated room {} (#{})", room.room_number, room.id);
        Ok(room)
    }

    fn delete_room(&mut self, id: u32) -> Result<Room> {
        self.ensure_available()?;
        let index = self
            .campus
            .rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::RoomNotFound(id))?;
        let room = self.campus.rooms.remove(index);
        log::info!("Deleted room {} (#{})", room.room_number, id);
        Ok(room)
    }
}
