//! Shape authoring engine — pointer input to committed building/room shapes.
//!
//! The engine is a small state machine over [`DraftShape`]:
//!
//! | State | Event | Next | Output |
//! |-------|-------|------|--------|
//! | Idle | down (rectangle mode) | Rect | preview |
//! | Idle | down (polygon mode) | Polygon | preview |
//! | Rect | move | Rect | preview |
//! | Rect | down | Rect (restarted) | preview |
//! | Rect | up | Idle | commit, or discard if zero-area |
//! | Polygon | down | Polygon (+1 point) | preview |
//! | Polygon | double-click / finish | Idle | commit, or discard if < 3 points |
//! | any draft | cancel | Idle | discard |
//! | any draft | mode switch | Idle | discard |
//!
//! Every sample is clamped to the canvas and snapped to the grid before it
//! touches the draft. Once a commit is produced the draft is gone; the
//! engine never holds on to it for a retry.

use serde::{Deserialize, Serialize};

use crate::constants::{colors, MIN_POLYGON_POINTS};
use crate::error::{StoreError, SubmitError};
use crate::geometry::Bounds;
use crate::grid::CanvasBounds;
use crate::model::{
    Building, BuildingShape, LocalizedNames, NewBuilding, NewRoom, Point, Room, RoomKind,
};
use crate::settings::AuthoringSettings;
use crate::store::CampusStore;

/// Which kind of shape a fresh pointer-down starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeMode {
    #[default]
    Rectangle,
    Polygon,
}

/// In-progress geometry, already snapped.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftShape {
    Rect { start: Point, end: Point },
    Polygon { points: Vec<Point> },
}

impl DraftShape {
    pub fn mode(&self) -> ShapeMode {
        match self {
            DraftShape::Rect { .. } => ShapeMode::Rectangle,
            DraftShape::Polygon { .. } => ShapeMode::Polygon,
        }
    }

    /// The rectangle this draft would commit as, ignoring zero-area.
    pub fn normalized_rect(&self) -> Option<Bounds> {
        match self {
            DraftShape::Rect { start, end } => Some(Bounds {
                min_x: start.x.min(end.x),
                min_y: start.y.min(end.y),
                max_x: start.x.max(end.x),
                max_y: start.y.max(end.y),
            }),
            DraftShape::Polygon { .. } => None,
        }
    }
}

/// Raw pointer input from the view, in map-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    DoubleClick(Point),
}

/// Finished geometry ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CommittedShape {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Polygon {
        points: Vec<Point>,
    },
}

impl CommittedShape {
    /// Normalize two corners into a rectangle. `None` for zero area.
    pub fn from_corners(a: Point, b: Point) -> Option<Self> {
        let width = (b.x - a.x).abs();
        let height = (b.y - a.y).abs();
        if width == 0.0 || height == 0.0 {
            return None;
        }
        Some(CommittedShape::Rect {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width,
            height,
        })
    }

    /// A polygon in click order. `None` below three points.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_POLYGON_POINTS {
            return None;
        }
        Some(CommittedShape::Polygon { points })
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            CommittedShape::Rect {
                x,
                y,
                width,
                height,
            } => Bounds::from_rect(*x, *y, *width, *height),
            CommittedShape::Polygon { points } => {
                Bounds::from_points(points).unwrap_or_else(|| Bounds::from_rect(0.0, 0.0, 0.0, 0.0))
            }
        }
    }

    /// Anchor position and building footprint for this shape. Outlines keep
    /// absolute coordinates; the anchor is their bounding-box corner.
    fn building_geometry(self) -> (Point, BuildingShape) {
        match self {
            CommittedShape::Rect {
                x,
                y,
                width,
                height,
            } => (Point::new(x, y), BuildingShape::Rect { width, height }),
            CommittedShape::Polygon { points } => {
                let b = Bounds::from_points(&points)
                    .unwrap_or_else(|| Bounds::from_rect(0.0, 0.0, 0.0, 0.0));
                (
                    Point::new(b.min_x, b.min_y),
                    BuildingShape::Outline { points },
                )
            }
        }
    }

    fn room_rect(self) -> Result<(f32, f32, f32, f32), SubmitError> {
        match self {
            CommittedShape::Rect {
                x,
                y,
                width,
                height,
            } => Ok((x, y, width, height)),
            CommittedShape::Polygon { points } => Err(SubmitError::RoomOutline(points.len())),
        }
    }
}

/// Non-geometric attributes of a building being created.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingTemplate {
    pub name: String,
    pub names: LocalizedNames,
    pub floors: u32,
    pub capacity: u32,
    pub color: String,
}

impl Default for BuildingTemplate {
    fn default() -> Self {
        Self {
            name: "New building".to_string(),
            names: LocalizedNames::new(),
            floors: 1,
            capacity: 0,
            color: colors::DEFAULT_BUILDING.to_string(),
        }
    }
}

/// Non-geometric attributes of a room being created.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTemplate {
    pub room_number: String,
    pub names: LocalizedNames,
    pub floor: u32,
    pub kind: RoomKind,
    pub capacity: Option<u32>,
    pub building_id: u32,
}

/// What a commit creates or replaces.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitTarget {
    NewBuilding(BuildingTemplate),
    NewRoom(RoomTemplate),
    ExistingBuilding(u32),
    ExistingRoom(u32),
}

impl Default for CommitTarget {
    fn default() -> Self {
        CommitTarget::NewBuilding(BuildingTemplate::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCommit {
    pub target: CommitTarget,
    pub shape: CommittedShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    ZeroArea,
    TooFewPoints,
    Cancelled,
    ModeSwitched,
}

/// Result of feeding one event to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthoringOutcome {
    /// Event had no effect in the current state.
    Ignored,
    /// Draft changed; the view should redraw it.
    Preview(DraftShape),
    Committed(ShapeCommit),
    Discarded(DiscardReason),
}

/// Interactive drawing tool state.
#[derive(Debug, Clone)]
pub struct AuthoringEngine {
    mode: ShapeMode,
    grid_size: f32,
    canvas: CanvasBounds,
    target: CommitTarget,
    draft: Option<DraftShape>,
}

impl AuthoringEngine {
    pub fn new(settings: &AuthoringSettings) -> Self {
        Self {
            mode: settings.initial_mode,
            grid_size: settings.grid_size,
            canvas: settings.canvas(),
            target: CommitTarget::default(),
            draft: None,
        }
    }

    pub fn with_target(mut self, target: CommitTarget) -> Self {
        self.target = target;
        self
    }

    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    pub fn target(&self) -> &CommitTarget {
        &self.target
    }

    /// Applies to the next commit; the draft in progress is kept.
    pub fn set_target(&mut self, target: CommitTarget) {
        self.target = target;
    }

    pub fn draft(&self) -> Option<&DraftShape> {
        self.draft.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Switch shape mode. A draft of the other kind is thrown away.
    pub fn set_mode(&mut self, mode: ShapeMode) -> AuthoringOutcome {
        if mode == self.mode {
            return AuthoringOutcome::Ignored;
        }
        self.mode = mode;
        match self.draft.take() {
            Some(_) => self.discard(DiscardReason::ModeSwitched),
            None => AuthoringOutcome::Ignored,
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> AuthoringOutcome {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p),
            PointerEvent::DoubleClick(_) => self.finish(),
        }
    }

    pub fn pointer_down(&mut self, raw: Point) -> AuthoringOutcome {
        let p = self.snap(raw);
        if let Some(DraftShape::Polygon { points }) = &mut self.draft {
            // The second click of a double-click lands on the same cell
            if points.last() != Some(&p) {
                points.push(p);
            }
            return self.preview();
        }
        // A stale rectangle (pointer-up lost outside the canvas) restarts here
        self.draft = Some(match self.mode {
            ShapeMode::Rectangle => DraftShape::Rect { start: p, end: p },
            ShapeMode::Polygon => DraftShape::Polygon { points: vec![p] },
        });
        self.preview()
    }

    pub fn pointer_move(&mut self, raw: Point) -> AuthoringOutcome {
        let p = self.snap(raw);
        match &mut self.draft {
            Some(DraftShape::Rect { end, .. }) => {
                if *end == p {
                    return AuthoringOutcome::Ignored;
                }
                *end = p;
                self.preview()
            }
            _ => AuthoringOutcome::Ignored,
        }
    }

    pub fn pointer_up(&mut self, raw: Point) -> AuthoringOutcome {
        let p = self.snap(raw);
        match self.draft.take() {
            Some(DraftShape::Rect { start, .. }) => match CommittedShape::from_corners(start, p) {
                Some(shape) => self.commit(shape),
                None => self.discard(DiscardReason::ZeroArea),
            },
            other => {
                self.draft = other;
                AuthoringOutcome::Ignored
            }
        }
    }

    /// Close the polygon being drawn (double-click or an explicit button).
    pub fn finish(&mut self) -> AuthoringOutcome {
        match self.draft.take() {
            Some(DraftShape::Polygon { points }) => match CommittedShape::from_points(points) {
                Some(shape) => self.commit(shape),
                None => self.discard(DiscardReason::TooFewPoints),
            },
            other => {
                self.draft = other;
                AuthoringOutcome::Ignored
            }
        }
    }

    /// Escape: drop whatever is being drawn.
    pub fn cancel(&mut self) -> AuthoringOutcome {
        match self.draft.take() {
            Some(_) => self.discard(DiscardReason::Cancelled),
            None => AuthoringOutcome::Ignored,
        }
    }

    fn snap(&self, raw: Point) -> Point {
        self.canvas.snap_within(raw, self.grid_size)
    }

    fn preview(&self) -> AuthoringOutcome {
        match &self.draft {
            Some(draft) => AuthoringOutcome::Preview(draft.clone()),
            None => AuthoringOutcome::Ignored,
        }
    }

    fn commit(&mut self, shape: CommittedShape) -> AuthoringOutcome {
        log::debug!("Committing {:?} for {:?}", shape, self.target);
        AuthoringOutcome::Committed(ShapeCommit {
            target: self.target.clone(),
            shape,
        })
    }

    fn discard(&mut self, reason: DiscardReason) -> AuthoringOutcome {
        log::debug!("Draft discarded: {:?}", reason);
        self.draft = None;
        AuthoringOutcome::Discarded(reason)
    }
}

/// A record written by [`submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoredEntity {
    Building(Building),
    Room(Room),
}

/// Hand a commit to the store. Store failures come back unchanged; nothing
/// is retried and the local campus is left as the store left it.
pub fn submit<S: CampusStore + ?Sized>(
    commit: ShapeCommit,
    store: &mut S,
) -> Result<StoredEntity, SubmitError> {
    let ShapeCommit { target, shape } = commit;
    let stored = match target {
        CommitTarget::NewBuilding(template) => {
            let (anchor, shape) = shape.building_geometry();
            let building = store.create_building(NewBuilding {
                name: template.name,
                names: template.names,
                floors: template.floors,
                capacity: template.capacity,
                color: template.color,
                x: anchor.x,
                y: anchor.y,
                shape,
            });
            StoredEntity::Building(building.map_err(log_failure)?)
        }
        CommitTarget::ExistingBuilding(id) => {
            let mut building = store
                .building(id)
                .ok_or(StoreError::BuildingNotFound(id))
                .map_err(log_failure)?;
            let (anchor, shape) = shape.building_geometry();
            building.x = anchor.x;
            building.y = anchor.y;
            building.shape = shape;
            StoredEntity::Building(store.update_building(building).map_err(log_failure)?)
        }
        CommitTarget::NewRoom(template) => {
            let (x, y, width, height) = shape.room_rect()?;
            let room = store.create_room(NewRoom {
                room_number: template.room_number,
                names: template.names,
                floor: template.floor,
                kind: template.kind,
                capacity: template.capacity,
                building_id: template.building_id,
                x,
                y,
                width,
                height,
            });
            StoredEntity::Room(room.map_err(log_failure)?)
        }
        CommitTarget::ExistingRoom(id) => {
            let mut room = store
                .room(id)
                .ok_or(StoreError::RoomNotFound(id))
                .map_err(log_failure)?;
            let (x, y, width, height) = shape.room_rect()?;
            room.x = x;
            room.y = y;
            room.width = width;
            room.height = height;
            StoredEntity::Room(store.update_room(room).map_err(log_failure)?)
        }
    };
    Ok(stored)
}

fn log_failure(err: StoreError) -> StoreError {
    log::warn!("Store rejected authored shape: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campus::Campus;
    use crate::store::MemoryStore;

    fn engine(mode: ShapeMode) -> AuthoringEngine {
        let settings = AuthoringSettings {
            initial_mode: mode,
            ..AuthoringSettings::default()
        };
        AuthoringEngine::new(&settings)
    }

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn drag(engine: &mut AuthoringEngine, from: Point, to: Point) -> AuthoringOutcome {
        engine.pointer_down(from);
        engine.pointer_move(to);
        engine.pointer_up(to)
    }

    fn committed(outcome: AuthoringOutcome) -> ShapeCommit {
        match outcome {
            AuthoringOutcome::Committed(commit) => commit,
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_drag_commits_normalized_rect() {
        let mut e = engine(ShapeMode::Rectangle);
        let commit = committed(drag(&mut e, p(98.0, 52.0), p(310.0, 240.0)));
        assert_eq!(
            commit.shape,
            CommittedShape::Rect {
                x: 100.0,
                y: 50.0,
                width: 200.0,
                height: 200.0
            }
        );
        assert!(!e.is_drawing());
    }

    #[test]
    fn drag_direction_does_not_matter() {
        let mut forward = engine(ShapeMode::Rectangle);
        let mut backward = engine(ShapeMode::Rectangle);
        let a = committed(drag(&mut forward, p(100.0, 100.0), p(300.0, 250.0)));
        let b = committed(drag(&mut backward, p(300.0, 250.0), p(100.0, 100.0)));
        assert_eq!(a.shape, b.shape);
    }

    #[test]
    fn move_updates_preview_without_commit() {
        let mut e = engine(ShapeMode::Rectangle);
        e.pointer_down(p(0.0, 0.0));
        let outcome = e.pointer_move(p(149.0, 101.0));
        assert_eq!(
            outcome,
            AuthoringOutcome::Preview(DraftShape::Rect {
                start: p(0.0, 0.0),
                end: p(150.0, 100.0)
            })
        );
        assert!(e.is_drawing());
        let rect = e.draft().and_then(DraftShape::normalized_rect).unwrap();
        assert_eq!((rect.width(), rect.height()), (150.0, 100.0));
    }

    #[test]
    fn zero_area_rectangle_is_discarded() {
        let mut e = engine(ShapeMode::Rectangle);
        let outcome = drag(&mut e, p(100.0, 100.0), p(110.0, 90.0));
        assert_eq!(outcome, AuthoringOutcome::Discarded(DiscardReason::ZeroArea));
        assert!(!e.is_drawing());
    }

    #[test]
    fn flat_rectangle_is_discarded() {
        let mut e = engine(ShapeMode::Rectangle);
        let outcome = drag(&mut e, p(100.0, 100.0), p(400.0, 110.0));
        assert_eq!(outcome, AuthoringOutcome::Discarded(DiscardReason::ZeroArea));
    }

    #[test]
    fn samples_outside_canvas_are_clamped() {
        let mut e = engine(ShapeMode::Rectangle);
        let commit = committed(drag(&mut e, p(-80.0, -80.0), p(5000.0, 120.0)));
        assert_eq!(
            commit.shape,
            CommittedShape::Rect {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn polygon_with_three_points_commits_in_click_order() {
        let mut e = engine(ShapeMode::Polygon);
        e.pointer_down(p(0.0, 0.0));
        e.pointer_down(p(200.0, 0.0));
        e.pointer_down(p(100.0, 150.0));
        let commit = committed(e.finish());
        assert_eq!(
            commit.shape,
            CommittedShape::Polygon {
                points: vec![p(0.0, 0.0), p(200.0, 0.0), p(100.0, 150.0)]
            }
        );
    }

    #[test]
    fn polygon_with_two_points_is_discarded() {
        let mut e = engine(ShapeMode::Polygon);
        e.pointer_down(p(0.0, 0.0));
        e.pointer_down(p(200.0, 0.0));
        assert_eq!(
            e.finish(),
            AuthoringOutcome::Discarded(DiscardReason::TooFewPoints)
        );
        assert!(!e.is_drawing());
    }

    #[test]
    fn double_click_closes_without_extra_vertex() {
        let mut e = engine(ShapeMode::Polygon);
        e.handle(PointerEvent::Down(p(0.0, 0.0)));
        e.handle(PointerEvent::Down(p(200.0, 0.0)));
        e.handle(PointerEvent::Down(p(200.0, 200.0)));
        // Browser sends a second down before the dblclick
        e.handle(PointerEvent::Down(p(204.0, 196.0)));
        let commit = committed(e.handle(PointerEvent::DoubleClick(p(204.0, 196.0))));
        match commit.shape {
            CommittedShape::Polygon { points } => assert_eq!(points.len(), 3),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn pointer_up_and_move_ignored_while_drawing_polygon() {
        let mut e = engine(ShapeMode::Polygon);
        e.pointer_down(p(0.0, 0.0));
        assert_eq!(e.pointer_move(p(100.0, 100.0)), AuthoringOutcome::Ignored);
        assert_eq!(e.pointer_up(p(100.0, 100.0)), AuthoringOutcome::Ignored);
        assert!(e.is_drawing());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut e = engine(ShapeMode::Polygon);
        e.pointer_down(p(0.0, 0.0));
        e.pointer_down(p(100.0, 0.0));
        assert_eq!(e.cancel(), AuthoringOutcome::Discarded(DiscardReason::Cancelled));
        assert!(e.draft().is_none());
        assert_eq!(e.cancel(), AuthoringOutcome::Ignored);
    }

    #[test]
    fn mode_switch_discards_draft() {
        let mut e = engine(ShapeMode::Rectangle);
        e.pointer_down(p(100.0, 100.0));
        assert_eq!(
            e.set_mode(ShapeMode::Polygon),
            AuthoringOutcome::Discarded(DiscardReason::ModeSwitched)
        );
        assert!(e.draft().is_none());
        assert_eq!(e.mode(), ShapeMode::Polygon);
        assert_eq!(e.set_mode(ShapeMode::Polygon), AuthoringOutcome::Ignored);
    }

    #[test]
    fn submit_new_building_outline_anchors_at_bounds() {
        let mut store = MemoryStore::default();
        let commit = ShapeCommit {
            target: CommitTarget::NewBuilding(BuildingTemplate {
                name: "Sports hall".into(),
                ..BuildingTemplate::default()
            }),
            shape: CommittedShape::Polygon {
                points: vec![p(100.0, 50.0), p(300.0, 50.0), p(200.0, 250.0)],
            },
        };
        let stored = submit(commit, &mut store).unwrap();
        match stored {
            StoredEntity::Building(b) => {
                assert_eq!(b.position(), p(100.0, 50.0));
                assert!(matches!(b.shape, BuildingShape::Outline { .. }));
            }
            other => panic!("expected building, got {other:?}"),
        }
        assert_eq!(store.campus().buildings.len(), 1);
    }

    #[test]
    fn submit_existing_room_updates_geometry() {
        let mut store = MemoryStore::default();
        let building = store
            .create_building(NewBuilding {
                name: "Main".into(),
                names: LocalizedNames::new(),
                floors: 2,
                capacity: 0,
                color: colors::DEFAULT_BUILDING.into(),
                x: 0.0,
                y: 0.0,
                shape: BuildingShape::Rect {
                    width: 800.0,
                    height: 400.0,
                },
            })
            .unwrap();
        let created = submit(
            ShapeCommit {
                target: CommitTarget::NewRoom(RoomTemplate {
                    room_number: "M12".into(),
                    names: LocalizedNames::new(),
                    floor: 1,
                    kind: RoomKind::Classroom,
                    capacity: Some(30),
                    building_id: building.id,
                }),
                shape: CommittedShape::Rect {
                    x: 200.0,
                    y: 150.0,
                    width: 100.0,
                    height: 50.0,
                },
            },
            &mut store,
        )
        .unwrap();
        let room_id = match created {
            StoredEntity::Room(r) => r.id,
            other => panic!("expected room, got {other:?}"),
        };

        submit(
            ShapeCommit {
                target: CommitTarget::ExistingRoom(room_id),
                shape: CommittedShape::Rect {
                    x: 250.0,
                    y: 150.0,
                    width: 50.0,
                    height: 100.0,
                },
            },
            &mut store,
        )
        .unwrap();
        let room = store.room(room_id).unwrap();
        assert_eq!((room.x, room.width, room.height), (250.0, 50.0, 100.0));
        assert_eq!(room.room_number, "M12");
    }

    #[test]
    fn room_outline_rejected_before_store() {
        let mut store = MemoryStore::default();
        let commit = ShapeCommit {
            target: CommitTarget::NewRoom(RoomTemplate {
                room_number: "A1".into(),
                names: LocalizedNames::new(),
                floor: 1,
                kind: RoomKind::Lab,
                capacity: None,
                building_id: 1,
            }),
            shape: CommittedShape::Polygon {
                points: vec![p(0.0, 0.0), p(50.0, 0.0), p(0.0, 50.0)],
            },
        };
        assert_eq!(
            submit(commit, &mut store).unwrap_err(),
            SubmitError::RoomOutline(3)
        );
    }

    #[test]
    fn store_failure_propagates_and_draft_is_gone() {
        let mut store = MemoryStore::default();
        store.set_available(false);
        let mut e = engine(ShapeMode::Rectangle);
        let commit = committed(drag(&mut e, p(0.0, 0.0), p(100.0, 100.0)));
        let err = submit(commit, &mut store).unwrap_err();
        assert_eq!(err, SubmitError::Store(StoreError::Unavailable));
        assert!(e.draft().is_none());
        assert!(store.campus().buildings.is_empty());
    }

    #[test]
    fn missing_existing_target_is_not_found() {
        let mut store = MemoryStore::default();
        let square = CommittedShape::Rect {
            x: 0.0,
            y: 0.0,
            width: 50.0,
            height: 50.0,
        };
        let building = ShapeCommit {
            target: CommitTarget::ExistingBuilding(7),
            shape: square.clone(),
        };
        let room = ShapeCommit {
            target: CommitTarget::ExistingRoom(8),
            shape: square,
        };
        assert_eq!(
            submit(building, &mut store).unwrap_err(),
            SubmitError::Store(StoreError::BuildingNotFound(7))
        );
        assert_eq!(
            submit(room, &mut store).unwrap_err(),
            SubmitError::Store(StoreError::RoomNotFound(8))
        );
        assert_eq!(store.campus(), &Campus::default());
    }

    #[test]
    fn room_without_building_can_be_reshaped() {
        let campus = Campus::new(
            vec![],
            vec![Room {
                id: 10,
                room_number: "M12".into(),
                names: LocalizedNames::new(),
                floor: 1,
                kind: RoomKind::Classroom,
                capacity: None,
                building_id: 1,
                x: 200.0,
                y: 150.0,
                width: 100.0,
                height: 50.0,
            }],
        );
        let mut store = MemoryStore::new(campus);
        let commit = ShapeCommit {
            target: CommitTarget::ExistingRoom(10),
            shape: CommittedShape::Rect {
                x: 200.0,
                y: 150.0,
                width: 50.0,
                height: 50.0,
            },
        };
        match submit(commit, &mut store).unwrap() {
            StoredEntity::Room(room) => {
                assert_eq!(room.building_id, 1);
                assert_eq!((room.width, room.height), (50.0, 50.0));
            }
            other => panic!("expected room, got {other:?}"),
        }
    }
}
