//! Grid snapping for authored geometry.
//!
//! Every pointer sample the authoring engine sees is clamped to the canvas
//! and then quantized to the nearest grid intersection.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::model::Point;

/// Round a single coordinate to the nearest multiple of `grid`.
pub fn snap_value(v: f32, grid: f32) -> f32 {
    (v / grid).round() * grid
}

/// Snap a point to the nearest grid intersection. `grid` must be positive.
pub fn snap(p: Point, grid: f32) -> Point {
    Point::new(snap_value(p.x, grid), snap_value(p.y, grid))
}

/// Drawable area of the authoring canvas, `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Clamp, snap, and step back one cell if rounding crossed the far edge
    /// (only possible when the extent is not a multiple of the grid).
    pub fn snap_within(&self, p: Point, grid: f32) -> Point {
        let s = snap(self.clamp(p), grid);
        let pull_in = |v: f32, max: f32| if v > max { v - grid } else { v };
        Point::new(pull_in(s.x, self.width), pull_in(s.y, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snaps_to_nearest_intersection() {
        assert_eq!(snap(Point::new(74.0, 26.0), 50.0), Point::new(50.0, 50.0));
        assert_eq!(snap(Point::new(76.0, 24.0), 50.0), Point::new(100.0, 0.0));
        assert_eq!(snap(Point::new(12.0, 13.0), 10.0), Point::new(10.0, 10.0));
    }

    #[test]
    fn clamps_before_snapping() {
        let canvas = CanvasBounds::default();
        let p = canvas.snap_within(Point::new(-40.0, 5000.0), 50.0);
        assert_eq!(p, Point::new(0.0, DEFAULT_CANVAS_HEIGHT));
    }

    #[test]
    fn unaligned_canvas_keeps_snapped_point_inside() {
        let canvas = CanvasBounds::new(1230.0, 800.0);
        let p = canvas.snap_within(Point::new(1229.0, 10.0), 50.0);
        assert_eq!(p, Point::new(1200.0, 0.0));
        assert!(canvas.contains(p));
    }

    proptest! {
        #[test]
        fn snap_is_idempotent(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
            grid in prop::sample::select(vec![1.0f32, 5.0, 10.0, 25.0, 50.0, 100.0]),
        ) {
            let once = snap(Point::new(x, y), grid);
            prop_assert_eq!(snap(once, grid), once);
        }

        #[test]
        fn snap_within_stays_on_canvas(
            x in -5_000.0f32..5_000.0,
            y in -5_000.0f32..5_000.0,
        ) {
            let canvas = CanvasBounds::default();
            prop_assert!(canvas.contains(canvas.snap_within(Point::new(x, y), 50.0)));
        }
    }
}
