//! Error types for the CampusNav core

use thiserror::Error;

/// Failures reported by the persistence collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("building #{0} not found")]
    BuildingNotFound(u32),

    #[error("room #{0} not found")]
    RoomNotFound(u32),

    #[error("building #{0} does not exist")]
    UnknownBuilding(u32),

    #[error("building #{building_id} still has {rooms} rooms")]
    HasDependents { building_id: u32, rooms: usize },

    #[error("room number {0} is already taken")]
    DuplicateRoomNumber(String),

    #[error("store rejected record: {0}")]
    Rejected(String),

    #[error("store unavailable")]
    Unavailable,
}

/// Failures while handing a committed shape to the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("rooms are rectangular; cannot store a {0}-point outline as a room")]
    RoomOutline(usize),
}

/// Failures while loading a campus or settings document.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
