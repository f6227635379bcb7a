//! Spatial entity records — buildings, rooms, localized names.
//!
//! Plain serde structs shaped like the documents the external store keeps
//! (camelCase keys). No behaviour beyond simple geometry accessors lives
//! here; authoring, filtering and selection operate on these records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{colors, FALLBACK_LOCALE};
use crate::geometry::{point_in_polygon, Bounds};

/// A point in map-space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ── Localized names ─────────────────────────────────────────────────────

/// Display names keyed by locale code (`en`, `ru`, `kk`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedNames(BTreeMap<String, String>);

impl LocalizedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: &str, name: &str) -> Self {
        self.insert(locale, name);
        self
    }

    pub fn insert(&mut self, locale: &str, name: &str) {
        self.0.insert(locale.to_string(), name.to_string());
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Name for `locale`, falling back to English, then to any entry.
    pub fn display(&self, locale: &str) -> Option<&str> {
        self.get(locale)
            .or_else(|| self.get(FALLBACK_LOCALE))
            .or_else(|| self.0.values().next().map(String::as_str))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// ── Rooms ───────────────────────────────────────────────────────────────

/// Room kind tag. Unknown tags from the store deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    #[default]
    Classroom,
    Hallway,
    Stairway,
    Elevator,
    Gym,
    Lab,
    Auditorium,
    #[serde(other)]
    Other,
}

impl RoomKind {
    pub const ALL: [RoomKind; 8] = [
        RoomKind::Classroom,
        RoomKind::Hallway,
        RoomKind::Stairway,
        RoomKind::Elevator,
        RoomKind::Gym,
        RoomKind::Lab,
        RoomKind::Auditorium,
        RoomKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoomKind::Classroom => "Classroom",
            RoomKind::Hallway => "Hallway",
            RoomKind::Stairway => "Stairway",
            RoomKind::Elevator => "Elevator",
            RoomKind::Gym => "Gym",
            RoomKind::Lab => "Lab",
            RoomKind::Auditorium => "Auditorium",
            RoomKind::Other => "Other",
        }
    }

    /// Hallways, stairs and lifts connect other rooms and may overlap them.
    pub fn is_circulation(self) -> bool {
        matches!(
            self,
            RoomKind::Hallway | RoomKind::Stairway | RoomKind::Elevator
        )
    }
}

/// A room, hallway, stairway or elevator on one floor of a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    pub room_number: String,
    #[serde(default)]
    pub names: LocalizedNames,
    pub floor: u32,
    #[serde(rename = "type", default)]
    pub kind: RoomKind,
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Lookup key into the campus buildings; may dangle after a delete.
    pub building_id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Room {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Localized name, or the room number when no name is set.
    pub fn display_name(&self, locale: &str) -> &str {
        self.names.display(locale).unwrap_or(&self.room_number)
    }
}

/// A room that has not been stored yet (no identity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    #[serde(default)]
    pub names: LocalizedNames,
    pub floor: u32,
    #[serde(rename = "type", default)]
    pub kind: RoomKind,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub building_id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NewRoom {
    pub fn with_id(self, id: u32) -> Room {
        Room {
            id,
            room_number: self.room_number,
            names: self.names,
            floor: self.floor,
            kind: self.kind,
            capacity: self.capacity,
            building_id: self.building_id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Buildings ───────────────────────────────────────────────────────────

/// Building footprint: a plain rectangle anchored at the building position,
/// or a custom outline in absolute map-space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum BuildingShape {
    Rect { width: f32, height: f32 },
    Outline { points: Vec<Point> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: LocalizedNames,
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default = "default_color")]
    pub color: String,
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub shape: BuildingShape,
}

fn default_floors() -> u32 {
    1
}

fn default_color() -> String {
    colors::DEFAULT_BUILDING.to_string()
}

impl Building {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bounds(&self) -> Bounds {
        match &self.shape {
            BuildingShape::Rect { width, height } => {
                Bounds::from_rect(self.x, self.y, *width, *height)
            }
            BuildingShape::Outline { points } => Bounds::from_points(points)
                .unwrap_or_else(|| Bounds::from_rect(self.x, self.y, 0.0, 0.0)),
        }
    }

    /// Point-in-footprint test. Outlines use the even-odd rule, so a
    /// self-intersecting outline still answers without failing.
    pub fn contains(&self, p: Point) -> bool {
        match &self.shape {
            BuildingShape::Rect { .. } => self.bounds().contains(p),
            BuildingShape::Outline { points } => point_in_polygon(p, points),
        }
    }

    pub fn display_name(&self, locale: &str) -> &str {
        self.names.display(locale).unwrap_or(&self.name)
    }
}

/// A building that has not been stored yet (no identity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBuilding {
    pub name: String,
    #[serde(default)]
    pub names: LocalizedNames,
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default = "default_color")]
    pub color: String,
    pub x: f32,
    pub y: f32,
    #[serde(flatten)]
    pub shape: BuildingShape,
}

impl NewBuilding {
    pub fn with_id(self, id: u32) -> Building {
        Building {
            id,
            name: self.name,
            names: self.names,
            floors: self.floors,
            capacity: self.capacity,
            color: self.color,
            x: self.x,
            y: self.y,
            shape: self.shape,
        }
    }
}
