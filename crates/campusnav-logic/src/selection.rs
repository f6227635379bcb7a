//! Start/destination room selection and the route segment between them.
//!
//! Two clicks pick a start and an end room; a third click always starts
//! over. The route is a straight segment between the two room positions,
//! drawn as a visual hint only. No graph search happens here.

use serde::{Deserialize, Serialize};

use crate::model::{Point, Room};

/// Straight line between the selected rooms, in map-space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl RouteSegment {
    pub fn between(start: &Room, end: &Room) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f32 {
        self.start().distance(self.end())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    NoSelection,
    HasStart {
        start: Room,
    },
    HasRoute {
        start: Room,
        end: Room,
    },
}

/// What a click or clear did, for the caller to forward to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    StartSelected { room_id: u32 },
    RouteReady(RouteSegment),
    /// A click while a route was shown; the clicked room is the new start.
    Restarted { room_id: u32 },
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationSelection {
    state: SelectionState,
}

impl NavigationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn start(&self) -> Option<&Room> {
        match &self.state {
            SelectionState::NoSelection => None,
            SelectionState::HasStart { start } | SelectionState::HasRoute { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn end(&self) -> Option<&Room> {
        match &self.state {
            SelectionState::HasRoute { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Route segment, present only once both rooms are chosen.
    pub fn route(&self) -> Option<RouteSegment> {
        match &self.state {
            SelectionState::HasRoute { start, end } => Some(RouteSegment::between(start, end)),
            _ => None,
        }
    }

    pub fn click(&mut self, room: &Room) -> SelectionEvent {
        let state = std::mem::take(&mut self.state);
        let (next, event) = match state {
            SelectionState::NoSelection => (
                SelectionState::HasStart {
                    start: room.clone(),
                },
                SelectionEvent::StartSelected { room_id: room.id },
            ),
            SelectionState::HasStart { start } if start.id == room.id => (
                SelectionState::HasStart { start },
                SelectionEvent::StartSelected { room_id: room.id },
            ),
            SelectionState::HasStart { start } => {
                let segment = RouteSegment::between(&start, room);
                (
                    SelectionState::HasRoute {
                        start,
                        end: room.clone(),
                    },
                    SelectionEvent::RouteReady(segment),
                )
            }
            SelectionState::HasRoute { .. } => (
                SelectionState::HasStart {
                    start: room.clone(),
                },
                SelectionEvent::Restarted { room_id: room.id },
            ),
        };
        log::debug!("Selection: {:?}", event);
        self.state = next;
        event
    }

    pub fn clear(&mut self) -> SelectionEvent {
        self.state = SelectionState::NoSelection;
        SelectionEvent::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocalizedNames, RoomKind};

    fn room(id: u32, number: &str, floor: u32, x: f32, y: f32) -> Room {
        Room {
            id,
            room_number: number.to_string(),
            names: LocalizedNames::new(),
            floor,
            kind: RoomKind::Classroom,
            capacity: None,
            building_id: 1,
            x,
            y,
            width: 50.0,
            height: 50.0,
        }
    }

    #[test]
    fn two_clicks_make_a_route() {
        let (a, b) = (room(1, "A", 1, 0.0, 0.0), room(2, "B", 1, 30.0, 40.0));
        let mut sel = NavigationSelection::new();

        assert_eq!(sel.click(&a), SelectionEvent::StartSelected { room_id: 1 });
        assert_eq!(sel.start().map(|r| r.id), Some(1));
        assert!(sel.end().is_none());
        assert!(sel.route().is_none());

        let event = sel.click(&b);
        let route = sel.route().unwrap();
        assert_eq!(event, SelectionEvent::RouteReady(route));
        assert_eq!(sel.end().map(|r| r.id), Some(2));
        assert_eq!(route.length(), 50.0);
    }

    #[test]
    fn third_click_restarts() {
        let a = room(1, "A", 1, 0.0, 0.0);
        let b = room(2, "B", 1, 100.0, 0.0);
        let c = room(3, "C", 1, 200.0, 0.0);
        let mut sel = NavigationSelection::new();
        sel.click(&a);
        sel.click(&b);
        assert_eq!(sel.click(&c), SelectionEvent::Restarted { room_id: 3 });
        assert_eq!(sel.state(), &SelectionState::HasStart { start: c });
    }

    #[test]
    fn clicking_an_endpoint_of_a_route_restarts_from_it() {
        let a = room(1, "A", 1, 0.0, 0.0);
        let b = room(2, "B", 1, 100.0, 0.0);
        let mut sel = NavigationSelection::new();
        sel.click(&a);
        sel.click(&b);
        sel.click(&b);
        assert_eq!(sel.start().map(|r| r.id), Some(2));
        assert!(sel.end().is_none());
    }

    #[test]
    fn same_room_twice_keeps_start() {
        let a = room(1, "A", 1, 0.0, 0.0);
        let mut sel = NavigationSelection::new();
        sel.click(&a);
        assert_eq!(sel.click(&a), SelectionEvent::StartSelected { room_id: 1 });
        assert!(sel.route().is_none());
        assert_eq!(sel.start().map(|r| r.id), Some(1));
    }

    #[test]
    fn clear_from_any_state() {
        let a = room(1, "A", 1, 0.0, 0.0);
        let b = room(2, "B", 1, 100.0, 0.0);
        let mut sel = NavigationSelection::new();
        assert_eq!(sel.clear(), SelectionEvent::Cleared);
        sel.click(&a);
        sel.clear();
        assert_eq!(sel.state(), &SelectionState::NoSelection);
        sel.click(&a);
        sel.click(&b);
        sel.clear();
        assert!(sel.start().is_none() && sel.route().is_none());
    }
}
