//! Shared constants — grid defaults, canvas extents, locales, colors.
//!
//! Plain values with no store or UI dependency. Both the library and the
//! headless harness read these.

/// Default grid cell size in map-units.
pub const DEFAULT_GRID_SIZE: f32 = 50.0;

/// Default authoring canvas extents in map-units (multiples of the grid).
pub const DEFAULT_CANVAS_WIDTH: f32 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 800.0;

/// A committed polygon needs at least this many vertices.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Locale used when a requested translation is missing.
pub const FALLBACK_LOCALE: &str = "en";

pub mod colors {
    /// Fill for newly authored buildings.
    pub const DEFAULT_BUILDING: &str = "#3b82f6";
    /// Fill for rooms whose building no longer resolves.
    pub const DANGLING_BUILDING: &str = "#9ca3af";
}

pub mod zoom {
    pub const MIN: f32 = 0.25;
    pub const MAX: f32 = 4.0;
    pub const STEP: f32 = 1.25;
}
