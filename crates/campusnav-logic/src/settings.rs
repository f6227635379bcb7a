//! Authoring and viewport settings.
//!
//! Administrators tune the grid and canvas before drawing. This module
//! provides the data model with defaults and the validation for it,
//! independent of any UI framework.
//!
//! ```
//! use campusnav_logic::settings::{validate_settings, AuthoringSettings};
//!
//! let mut settings = AuthoringSettings::default();
//! settings.grid_size = 25.0;
//! assert!(validate_settings(&settings).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::authoring::ShapeMode;
use crate::constants::{
    zoom, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_SIZE, FALLBACK_LOCALE,
};
use crate::error::FixtureError;
use crate::grid::CanvasBounds;

/// Settings for the drawing tool and the map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthoringSettings {
    /// Grid cell size in map-units.
    pub grid_size: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Shape mode the drawing tool starts in.
    pub initial_mode: ShapeMode,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Locale used for display names.
    pub locale: String,
}

impl Default for AuthoringSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            initial_mode: ShapeMode::Rectangle,
            min_zoom: zoom::MIN,
            max_zoom: zoom::MAX,
            locale: FALLBACK_LOCALE.to_string(),
        }
    }
}

impl AuthoringSettings {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn canvas(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width, self.canvas_height)
    }
}

/// Settings validation error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Grid cell size must be positive and finite.
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(f32),
    /// Canvas extents must be positive and finite.
    #[error("canvas must be positive, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },
    /// Zoom range must satisfy `0 < min <= 1 <= max`.
    #[error("zoom range {min}..{max} must contain 1.0")]
    InvalidZoomRange { min: f32, max: f32 },
    #[error("locale is empty")]
    EmptyLocale,
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Validate settings, returning all errors found.
pub fn validate_settings(settings: &AuthoringSettings) -> Vec<SettingsError> {
    let mut errors = Vec::new();

    if !positive(settings.grid_size) {
        errors.push(SettingsError::InvalidGridSize(settings.grid_size));
    }
    if !positive(settings.canvas_width) || !positive(settings.canvas_height) {
        errors.push(SettingsError::InvalidCanvas {
            width: settings.canvas_width,
            height: settings.canvas_height,
        });
    }
    if !positive(settings.min_zoom)
        || !settings.max_zoom.is_finite()
        || settings.min_zoom > 1.0
        || settings.max_zoom < 1.0
    {
        errors.push(SettingsError::InvalidZoomRange {
            min: settings.min_zoom,
            max: settings.max_zoom,
        });
    }
    if settings.locale.trim().is_empty() {
        errors.push(SettingsError::EmptyLocale);
    }

    errors
}
