//! Map viewport — pan offset, drag routing, hit testing.
//!
//! A press on a building or room is a selection click; a press on empty
//! background starts a pan. Only translation is applied to coordinates. The
//! zoom level is tracked for the zoom controls but no transform reads it.

use crate::campus::Campus;
use crate::constants::zoom;
use crate::model::Point;
use crate::settings::AuthoringSettings;

/// What lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Room(u32),
    Building(u32),
}

/// Topmost shape under `p` (map-space): rooms on `floor` first, later rooms
/// above earlier ones, then buildings.
pub fn hit_test(campus: &Campus, floor: u32, p: Point) -> Option<HitTarget> {
    campus
        .rooms
        .iter()
        .rev()
        .find(|r| r.floor == floor && r.contains(p))
        .map(|r| HitTarget::Room(r.id))
        .or_else(|| {
            campus
                .buildings
                .iter()
                .rev()
                .find(|b| b.contains(p))
                .map(|b| HitTarget::Building(b.id))
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Press { target: HitTarget },
    Pan { last: Point, moved: Point },
}

/// How a drag gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    None,
    Click(HitTarget),
    Panned { dx: f32, dy: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset: Point,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    gesture: Option<Gesture>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::default(),
            zoom: 1.0,
            min_zoom: zoom::MIN,
            max_zoom: zoom::MAX,
            gesture: None,
        }
    }
}

impl Viewport {
    pub fn new(settings: &AuthoringSettings) -> Self {
        Self {
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn to_screen(&self, map: Point) -> Point {
        Point::new(map.x + self.offset.x, map.y + self.offset.y)
    }

    pub fn to_map(&self, screen: Point) -> Point {
        Point::new(screen.x - self.offset.x, screen.y - self.offset.y)
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    pub fn reset(&mut self) {
        self.offset = Point::default();
        self.zoom = 1.0;
        self.gesture = None;
    }

    /// Start a gesture at `screen`. `hit` is what the caller found under the
    /// pointer (see [`hit_test`]).
    pub fn begin_drag(&mut self, screen: Point, hit: Option<HitTarget>) {
        self.gesture = Some(match hit {
            Some(target) => Gesture::Press { target },
            None => Gesture::Pan {
                last: screen,
                moved: Point::default(),
            },
        });
    }

    /// Continue the gesture. Presses on shapes do not pan.
    pub fn drag_to(&mut self, screen: Point) {
        if let Some(Gesture::Pan { last, moved }) = &mut self.gesture {
            let (dx, dy) = (screen.x - last.x, screen.y - last.y);
            *last = screen;
            moved.x += dx;
            moved.y += dy;
            self.offset.x += dx;
            self.offset.y += dy;
        }
    }

    pub fn end_drag(&mut self) -> GestureOutcome {
        match self.gesture.take() {
            Some(Gesture::Press { target }) => GestureOutcome::Click(target),
            Some(Gesture::Pan { moved, .. }) => GestureOutcome::Panned {
                dx: moved.x,
                dy: moved.y,
            },
            None => GestureOutcome::None,
        }
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.zoom = (self.zoom * zoom::STEP).min(self.max_zoom);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.zoom = (self.zoom / zoom::STEP).max(self.min_zoom);
        self.zoom
    }
}
