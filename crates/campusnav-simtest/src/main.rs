//! CampusNav Headless Validation Harness
//!
//! Exercises the spatial core against a campus fixture without a document
//! store or a browser. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p campusnav-simtest
//!   cargo run -p campusnav-simtest -- --verbose
//!   cargo run -p campusnav-simtest -- --fixture path/to/campus.json

use campusnav_logic::authoring::{
    submit, AuthoringEngine, AuthoringOutcome, CommitTarget, DiscardReason, RoomTemplate,
    ShapeMode, StoredEntity,
};
use campusnav_logic::campus::Campus;
use campusnav_logic::error::{StoreError, SubmitError};
use campusnav_logic::filter::{available_floors, visible_rooms, FloorFilter, FloorIndex};
use campusnav_logic::geometry::{validate_all, Severity};
use campusnav_logic::grid::snap;
use campusnav_logic::model::{LocalizedNames, Point, RoomKind};
use campusnav_logic::selection::{NavigationSelection, SelectionEvent};
use campusnav_logic::settings::{validate_settings, AuthoringSettings};
use campusnav_logic::store::{CampusStore, DeletePolicy, MemoryStore};
use campusnav_logic::viewport::{hit_test, GestureOutcome, HitTarget, Viewport};

// ── Bundled campus fixture ──────────────────────────────────────────────
const CAMPUS_JSON: &str = include_str!("../../../data/campus.json");

// ── Harness configuration ───────────────────────────────────────────────

struct HarnessConfig {
    verbose: bool,
    fixture: Option<String>,
}

impl HarnessConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self {
            verbose: false,
            fixture: None,
        };
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--verbose" | "-v" => {
                    config.verbose = true;
                    i += 1;
                }
                "--fixture" | "-f" if i + 1 < args.len() => {
                    config.fixture = Some(args[i + 1].clone());
                    i += 2;
                }
                _ => i += 1,
            }
        }
        config
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let config = HarnessConfig::from_args();
    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("=== CampusNav Validation Harness ===\n");

    let campus = match load_campus(&config) {
        Ok(campus) => campus,
        Err(e) => {
            println!("  ✗ fixture_load: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} buildings, {} rooms",
        campus.buildings.len(),
        campus.rooms.len()
    );

    let mut results = Vec::new();

    // 1. Layout validation
    results.extend(validate_layout(&campus));

    // 2. Grid snapping
    results.extend(validate_grid());

    // 3. Shape authoring
    results.extend(validate_authoring());

    // 4. Floor & search filter
    results.extend(validate_filter(&campus));

    // 5. Selection & route
    results.extend(validate_selection(&campus));

    // 6. Viewport
    results.extend(validate_viewport(&campus));

    // 7. Store & deletion policies
    results.extend(validate_store(&campus));

    // 8. Settings
    results.extend(validate_settings_defaults());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || config.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn load_campus(config: &HarnessConfig) -> Result<Campus, campusnav_logic::error::FixtureError> {
    match &config.fixture {
        Some(path) => Campus::load(path),
        None => Campus::from_json(CAMPUS_JSON),
    }
}

// ── 1. Layout ───────────────────────────────────────────────────────────

fn validate_layout(campus: &Campus) -> Vec<TestResult> {
    println!("--- Layout Validation ---");
    let mut results = Vec::new();

    results.push(check(
        "fixture_not_empty",
        !campus.buildings.is_empty() && !campus.rooms.is_empty(),
        format!(
            "{} buildings, {} rooms",
            campus.buildings.len(),
            campus.rooms.len()
        ),
    ));

    let issues = validate_all(campus);
    let errors: Vec<_> = issues
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .collect();
    for w in issues.iter().filter(|e| e.severity == Severity::Warning) {
        log::warn!("[{}] {}", w.category, w.message);
    }
    results.push(check(
        "layout_no_errors",
        errors.is_empty(),
        match errors.first() {
            Some(e) => format!("{} errors, first: {}", errors.len(), e.message),
            None => format!("{} warnings", issues.len()),
        },
    ));

    let orphans = campus.orphaned_rooms().count();
    results.push(check(
        "no_orphaned_rooms",
        orphans == 0,
        format!("{} rooms reference missing buildings", orphans),
    ));

    results
}

// ── 2. Grid ─────────────────────────────────────────────────────────────

fn validate_grid() -> Vec<TestResult> {
    println!("--- Grid Snap ---");
    let mut results = Vec::new();

    let mut idempotent = true;
    let mut worst = Point::default();
    for grid in [10.0f32, 25.0, 50.0, 100.0] {
        for i in 0..200 {
            let raw = Point::new(i as f32 * 7.3 - 300.0, i as f32 * 3.9 + 11.0);
            let once = snap(raw, grid);
            if snap(once, grid) != once {
                idempotent = false;
                worst = raw;
            }
        }
    }
    results.push(check(
        "snap_idempotent",
        idempotent,
        if idempotent {
            "800 samples stable".to_string()
        } else {
            format!("unstable at {:?}", worst)
        },
    ));

    let s = snap(Point::new(74.0, 26.0), 50.0);
    results.push(check(
        "snap_nearest",
        s == Point::new(50.0, 50.0),
        format!("(74,26) → ({},{})", s.x, s.y),
    ));

    results
}

// ── 3. Authoring ────────────────────────────────────────────────────────

fn validate_authoring() -> Vec<TestResult> {
    println!("--- Shape Authoring ---");
    let mut results = Vec::new();
    let settings = AuthoringSettings::default();

    // Both drag directions give the same rectangle
    let drag = |from: Point, to: Point| {
        let mut engine = AuthoringEngine::new(&settings);
        engine.pointer_down(from);
        engine.pointer_move(to);
        engine.pointer_up(to)
    };
    let forward = drag(Point::new(100.0, 100.0), Point::new(300.0, 250.0));
    let backward = drag(Point::new(300.0, 250.0), Point::new(100.0, 100.0));
    results.push(check(
        "rect_normalized",
        matches!(forward, AuthoringOutcome::Committed(_)) && forward == backward,
        "TL→BR == BR→TL",
    ));

    let zero = drag(Point::new(100.0, 100.0), Point::new(100.0, 100.0));
    results.push(check(
        "rect_zero_area_discarded",
        zero == AuthoringOutcome::Discarded(DiscardReason::ZeroArea),
        format!("{:?}", zero),
    ));

    // Polygon minimum
    let mut poly = AuthoringEngine::new(&AuthoringSettings {
        initial_mode: ShapeMode::Polygon,
        ..settings.clone()
    });
    poly.pointer_down(Point::new(0.0, 0.0));
    poly.pointer_down(Point::new(200.0, 0.0));
    let two = poly.finish();
    results.push(check(
        "polygon_two_points_discarded",
        two == AuthoringOutcome::Discarded(DiscardReason::TooFewPoints),
        format!("{:?}", two),
    ));

    poly.pointer_down(Point::new(0.0, 0.0));
    poly.pointer_down(Point::new(200.0, 0.0));
    poly.pointer_down(Point::new(100.0, 150.0));
    let three = poly.finish();
    results.push(check(
        "polygon_three_points_committed",
        matches!(three, AuthoringOutcome::Committed(_)),
        "3 clicks + finish",
    ));

    // Cancel, then a fresh rectangle must not carry old points
    poly.pointer_down(Point::new(600.0, 600.0));
    poly.pointer_down(Point::new(700.0, 600.0));
    poly.cancel();
    poly.set_mode(ShapeMode::Rectangle);
    poly.pointer_down(Point::new(50.0, 50.0));
    let clean = poly
        .draft()
        .and_then(|d| d.normalized_rect())
        .map(|b| b.min_x == 50.0 && b.min_y == 50.0)
        .unwrap_or(false);
    results.push(check(
        "cancel_discards_draft",
        clean,
        "cancelled polygon absent from new rectangle",
    ));

    results
}

// ── 4. Filter ───────────────────────────────────────────────────────────

fn validate_filter(campus: &Campus) -> Vec<TestResult> {
    println!("--- Floor & Search Filter ---");
    let mut results = Vec::new();

    let floors = available_floors(&campus.rooms);
    let sorted = floors.windows(2).all(|w| w[0] < w[1]);
    results.push(check(
        "floors_sorted_distinct",
        sorted && !floors.is_empty(),
        format!("{:?}", floors),
    ));

    let mut all_floor_ok = true;
    for &floor in &floors {
        let shown = visible_rooms(&campus.rooms, floor, "");
        let expected = campus.rooms.iter().filter(|r| r.floor == floor).count();
        if shown.len() != expected {
            all_floor_ok = false;
        }
    }
    results.push(check(
        "empty_query_whole_floor",
        all_floor_ok,
        format!("{} floors checked", floors.len()),
    ));

    let mut subset_ok = true;
    for &floor in &floors {
        let whole = visible_rooms(&campus.rooms, floor, "");
        for query in ["m", "LAB", "зал", "1", "zzz"] {
            for r in visible_rooms(&campus.rooms, floor, query) {
                if !whole.iter().any(|w| w.id == r.id) {
                    subset_ok = false;
                }
            }
        }
    }
    results.push(check("query_subset_of_floor", subset_ok, "5 queries per floor"));

    let mut filter = FloorFilter {
        current_floor: 99,
        query: String::new(),
    };
    let mut index = FloorIndex::new();
    let changed = filter.ensure_valid_floor(index.floors(campus));
    results.push(check(
        "floor_filter_recovers",
        changed && Some(&filter.current_floor) == floors.first(),
        format!("floor 99 → {}", filter.current_floor),
    ));

    results
}

// ── 5. Selection ────────────────────────────────────────────────────────

fn validate_selection(campus: &Campus) -> Vec<TestResult> {
    println!("--- Selection & Route ---");
    let mut results = Vec::new();

    if campus.rooms.len() < 3 {
        results.push(check("selection_rooms", false, "need at least 3 rooms"));
        return results;
    }
    let (a, b, c) = (&campus.rooms[0], &campus.rooms[1], &campus.rooms[2]);
    let mut selection = NavigationSelection::new();

    selection.click(a);
    results.push(check(
        "first_click_sets_start",
        selection.start().map(|r| r.id) == Some(a.id) && selection.end().is_none(),
        format!("start={}", a.room_number),
    ));

    let event = selection.click(b);
    let route_ok = match (event, selection.route()) {
        (SelectionEvent::RouteReady(seg), Some(route)) => {
            seg == route && route.x1 == a.x && route.y1 == a.y && route.x2 == b.x
        }
        _ => false,
    };
    results.push(check(
        "second_click_makes_route",
        route_ok,
        format!("{} → {}", a.room_number, b.room_number),
    ));

    selection.click(c);
    results.push(check(
        "third_click_restarts",
        selection.start().map(|r| r.id) == Some(c.id) && selection.route().is_none(),
        format!("start={}", c.room_number),
    ));

    selection.clear();
    results.push(check(
        "clear_resets",
        selection.start().is_none(),
        "no selection",
    ));

    results
}

// ── 6. Viewport ─────────────────────────────────────────────────────────

fn validate_viewport(campus: &Campus) -> Vec<TestResult> {
    println!("--- Viewport ---");
    let mut results = Vec::new();

    let mut vp = Viewport::default();
    vp.begin_drag(Point::new(0.0, 0.0), None);
    vp.drag_to(Point::new(40.0, -20.0));
    let panned = vp.end_drag();
    results.push(check(
        "background_drag_pans",
        panned == GestureOutcome::Panned { dx: 40.0, dy: -20.0 },
        format!("offset {:?}", vp.offset()),
    ));

    let mut click_ok = true;
    for room in &campus.rooms {
        let screen = vp.to_screen(room.center());
        let hit = hit_test(campus, room.floor, vp.to_map(screen));
        if !matches!(hit, Some(HitTarget::Room(_))) {
            click_ok = false;
        }
    }
    results.push(check(
        "room_centers_hit_rooms",
        click_ok,
        format!("{} rooms", campus.rooms.len()),
    ));

    results
}

// ── 7. Store ────────────────────────────────────────────────────────────

fn validate_store(campus: &Campus) -> Vec<TestResult> {
    println!("--- Store & Deletion ---");
    let mut results = Vec::new();

    let Some(building) = campus.buildings.first() else {
        results.push(check("store_building", false, "fixture has no buildings"));
        return results;
    };

    // Authoring → store round trip
    let mut store = MemoryStore::new(campus.clone());
    let mut engine = AuthoringEngine::new(&AuthoringSettings::default()).with_target(
        CommitTarget::NewRoom(RoomTemplate {
            room_number: "SIM-1".into(),
            names: LocalizedNames::new().with("en", "Harness room"),
            floor: 1,
            kind: RoomKind::Other,
            capacity: None,
            building_id: building.id,
        }),
    );
    engine.pointer_down(Point::new(1000.0, 50.0));
    let stored = match engine.pointer_up(Point::new(1150.0, 150.0)) {
        AuthoringOutcome::Committed(commit) => submit(commit, &mut store).ok(),
        _ => None,
    };
    results.push(check(
        "authored_room_stored",
        matches!(stored, Some(StoredEntity::Room(_))),
        format!("{} rooms", store.campus().rooms.len()),
    ));

    // Outage: error surfaces, nothing changes
    store.set_available(false);
    let before = store.campus().rooms.len();
    engine.pointer_down(Point::new(1000.0, 300.0));
    let failed = match engine.pointer_up(Point::new(1100.0, 400.0)) {
        AuthoringOutcome::Committed(commit) => submit(commit, &mut store).err(),
        _ => None,
    };
    results.push(check(
        "store_failure_propagates",
        failed == Some(SubmitError::Store(StoreError::Unavailable))
            && store.campus().rooms.len() == before
            && !engine.is_drawing(),
        format!("{:?}", failed),
    ));
    store.set_available(true);

    // Deletion policies
    let dependents = store.campus().rooms_in_building(building.id).count();
    let rejected = store.delete_building(building.id, DeletePolicy::RejectIfDependents);
    results.push(check(
        "delete_rejects_with_dependents",
        dependents == 0 || rejected.is_err(),
        format!("{} dependents", dependents),
    ));

    let mut orphan_store = MemoryStore::new(campus.clone());
    let report = orphan_store.delete_building(building.id, DeletePolicy::Orphan);
    let flagged = validate_all(orphan_store.campus())
        .iter()
        .filter(|e| e.category == "dangling_reference")
        .count();
    results.push(check(
        "orphan_delete_flagged",
        report.map(|r| r.orphaned_rooms.len() == flagged).unwrap_or(false),
        format!("{} dangling rooms flagged", flagged),
    ));

    let cascaded = store
        .delete_building(building.id, DeletePolicy::Cascade)
        .map(|r| r.removed_rooms.len());
    results.push(check(
        "cascade_delete_removes_rooms",
        cascaded == Ok(dependents),
        format!("{:?}", cascaded),
    ));

    results
}

// ── 8. Settings ─────────────────────────────────────────────────────────

fn validate_settings_defaults() -> Vec<TestResult> {
    println!("--- Settings ---");
    let errors = validate_settings(&AuthoringSettings::default());
    vec![check(
        "default_settings_valid",
        errors.is_empty(),
        format!("{:?}", errors),
    )]
}
