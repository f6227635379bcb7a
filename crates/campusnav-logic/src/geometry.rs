//! Geometry primitives and layout validation for authored campuses.
//!
//! Pure functions that take building/room data and return validation errors.
//! No store dependency — works with plain records.

use std::collections::{HashMap, HashSet};

use crate::campus::Campus;
use crate::constants::MIN_POLYGON_POINTS;
use crate::model::{Building, BuildingShape, Point, Room};

// ── Primitives ──────────────────────────────────────────────────────────

/// Axis-aligned bounds in map-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Inclusive containment on all edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn overlaps(&self, other: &Bounds, tolerance: f32) -> bool {
        (self.max_x - tolerance) > other.min_x
            && (other.max_x - tolerance) > self.min_x
            && (self.max_y - tolerance) > other.min_y
            && (other.max_y - tolerance) > self.min_y
    }
}

/// Even-odd point-in-polygon test. Tolerates self-intersecting outlines.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    if polygon.len() < MIN_POLYGON_POINTS {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn orientation(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Whether segments `p1-p2` and `q1-q2` touch or cross.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

/// Whether any two non-adjacent edges of the closed polygon intersect.
pub fn polygon_self_intersects(points: &[Point]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        let (a1, a2) = (points[i], points[(i + 1) % n]);
        for j in (i + 1)..n {
            // Skip edges sharing a vertex with edge i
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let (b1, b2) = (points[j], points[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2) {
                return true;
            }
        }
    }
    false
}

/// Shoelace area of a closed polygon (absolute value).
pub fn polygon_area(points: &[Point]) -> f32 {
    if points.len() < MIN_POLYGON_POINTS {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[(i + 1) % points.len()]);
        twice += a.x * b.y - b.x * a.y;
    }
    (twice / 2.0).abs()
}

// ── Validation results ──────────────────────────────────────────────────

/// A layout validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Building outlines ────────────────────────────────────────────────

/// Outlines need at least three vertices; self-intersection is only a
/// warning because the authoring tool does not prevent it.
pub fn check_building_outlines(buildings: &[Building]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for b in buildings {
        match &b.shape {
            BuildingShape::Outline { points } => {
                if points.len() < MIN_POLYGON_POINTS {
                    errors.push(ValidationError {
                        category: "building_outline",
                        severity: Severity::Error,
                        message: format!(
                            "Building #{} outline has {} points (needs {})",
                            b.id,
                            points.len(),
                            MIN_POLYGON_POINTS
                        ),
                    });
                } else if polygon_self_intersects(points) {
                    errors.push(ValidationError {
                        category: "building_outline",
                        severity: Severity::Warning,
                        message: format!("Building #{} outline self-intersects", b.id),
                    });
                }
            }
            BuildingShape::Rect { width, height } => {
                if *width <= 0.0 || *height <= 0.0 {
                    errors.push(ValidationError {
                        category: "building_outline",
                        severity: Severity::Error,
                        message: format!(
                            "Building #{} has non-positive dimensions: {}×{}",
                            b.id, width, height
                        ),
                    });
                }
            }
        }
    }
    errors
}

// ── B. Room geometry (per-room) ─────────────────────────────────────────

/// Check that room position and size are finite, non-negative, non-empty.
pub fn check_room_dimensions(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for r in rooms {
        let values = [r.x, r.y, r.width, r.height];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room {} has invalid geometry: ({}, {}) {}×{}",
                    r.room_number, r.x, r.y, r.width, r.height
                ),
            });
        } else if r.width == 0.0 || r.height == 0.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!("Room {} has zero area", r.room_number),
            });
        }
    }
    errors
}

/// Floors are 1-based and should not exceed the building's floor count.
pub fn check_room_floors(rooms: &[Room], buildings: &[Building]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let floors_by_building: HashMap<u32, u32> =
        buildings.iter().map(|b| (b.id, b.floors)).collect();

    for r in rooms {
        if r.floor == 0 {
            errors.push(ValidationError {
                category: "room_floor",
                severity: Severity::Error,
                message: format!("Room {} is on floor 0 (floors start at 1)", r.room_number),
            });
            continue;
        }
        if let Some(&floors) = floors_by_building.get(&r.building_id) {
            if r.floor > floors {
                errors.push(ValidationError {
                    category: "room_floor",
                    severity: Severity::Warning,
                    message: format!(
                        "Room {} is on floor {} but building #{} has {} floors",
                        r.room_number, r.floor, r.building_id, floors
                    ),
                });
            }
        }
    }
    errors
}

// ── C. References ───────────────────────────────────────────────────────

/// Rooms whose building no longer exists. Reported as warnings: renderers
/// fall back to a neutral style, nothing fails.
pub fn check_dangling_buildings(rooms: &[Room], buildings: &[Building]) -> Vec<ValidationError> {
    let building_ids: HashSet<u32> = buildings.iter().map(|b| b.id).collect();
    rooms
        .iter()
        .filter(|r| !building_ids.contains(&r.building_id))
        .map(|r| ValidationError {
            category: "dangling_reference",
            severity: Severity::Warning,
            message: format!(
                "Room {} references missing building #{}",
                r.room_number, r.building_id
            ),
        })
        .collect()
}

/// Room numbers are unique per campus (case-insensitive).
pub fn check_duplicate_room_numbers(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<String, u32> = HashMap::new();
    for r in rooms {
        let key = r.room_number.trim().to_lowercase();
        if let Some(first) = seen.get(&key) {
            errors.push(ValidationError {
                category: "room_number",
                severity: Severity::Error,
                message: format!(
                    "Room number {} used by rooms #{} and #{}",
                    r.room_number, first, r.id
                ),
            });
        } else {
            seen.insert(key, r.id);
        }
    }
    errors
}

// ── D. Room-to-room (pairwise) ──────────────────────────────────────────

/// AABB overlap test within each (building, floor). Hallways, stairs and
/// elevators are allowed to overlap the rooms they serve.
pub fn check_room_overlaps(rooms: &[Room]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let tolerance = 0.1;

    let mut by_floor: HashMap<(u32, u32), Vec<&Room>> = HashMap::new();
    for r in rooms {
        by_floor.entry((r.building_id, r.floor)).or_default().push(r);
    }

    for floor_rooms in by_floor.values() {
        for i in 0..floor_rooms.len() {
            for j in (i + 1)..floor_rooms.len() {
                let (a, b) = (floor_rooms[i], floor_rooms[j]);
                if a.kind.is_circulation() || b.kind.is_circulation() {
                    continue;
                }
                if a.bounds().overlaps(&b.bounds(), tolerance) {
                    errors.push(ValidationError {
                        category: "room_overlap",
                        severity: Severity::Warning,
                        message: format!(
                            "{} {} and {} {} overlap on floor {}",
                            a.kind.label(),
                            a.room_number,
                            b.kind.label(),
                            b.room_number,
                            a.floor
                        ),
                    });
                }
            }
        }
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all layout validations and return combined results.
pub fn validate_all(campus: &Campus) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_building_outlines(&campus.buildings));
    all.extend(check_room_dimensions(&campus.rooms));
    all.extend(check_room_floors(&campus.rooms, &campus.buildings));
    all.extend(check_dangling_buildings(&campus.rooms, &campus.buildings));
    all.extend(check_duplicate_room_numbers(&campus.rooms));
    all.extend(check_room_overlaps(&campus.rooms));
    all
}
