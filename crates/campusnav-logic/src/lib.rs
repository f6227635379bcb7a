//! Spatial authoring and navigation core for CampusNav.
//!
//! This crate contains the campus map logic that is independent of any
//! document store, browser, or view layer. Functions take plain records and
//! return results, making them unit-testable and usable from the web
//! backend, native tools, and the headless harness alike.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`authoring`] | Grid-snapped rectangle/polygon drawing tool and commit hand-off |
//! | [`campus`] | Campus aggregate, JSON loading, dangling-reference-tolerant lookups |
//! | [`constants`] | Grid defaults, canvas extents, locales, colors |
//! | [`error`] | Store, submit and fixture errors |
//! | [`filter`] | Floor selector and text search over rooms |
//! | [`geometry`] | Bounds, polygon tests, layout validation |
//! | [`grid`] | Grid snapping and canvas clamping |
//! | [`model`] | Building, room and localized-name records |
//! | [`selection`] | Two-click start/end selection and route segment |
//! | [`settings`] | Authoring/viewport settings and validation |
//! | [`store`] | Persistence collaborator trait and in-memory store |
//! | [`viewport`] | Pan offset, drag routing, hit testing |

pub mod authoring;
pub mod campus;
pub mod constants;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod selection;
pub mod settings;
pub mod store;
pub mod viewport;
