//! Sandbox settings and preferences
//!
//! Persisted as JSON next to the binary. Unknown or missing fields fall
//! back to their defaults, so old settings files keep loading after new
//! fields appear.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{
    DEFAULT_CIRCLE_RADIUS, DEFAULT_GRAVITY, DEFAULT_SQUARE_SIZE, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};
use crate::error::Result;
use crate::sim::Viewport;

/// Sandbox settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Downward acceleration applied to every shape each tick
    pub gravity: f64,

    // === Viewport ===
    pub viewport_width: f64,
    pub viewport_height: f64,

    // === Spawning ===
    /// Radius for circles added without an explicit radius
    pub circle_radius: f64,
    /// Side length for squares added without an explicit size
    pub square_size: f64,
    /// Fill color for new circles when `random_circle_colors` is off
    pub circle_color: Color,
    /// Give every new circle a random color instead of `circle_color`
    pub random_circle_colors: bool,
    /// Fill color for new squares
    pub square_color: Color,

    // === Appearance ===
    /// Background gradient, top edge
    pub background_top: Color,
    /// Background gradient, bottom edge
    pub background_bottom: Color,

    // === Audio ===
    /// Play a sound on every bounce
    pub sound_enabled: bool,

    // === Demo ===
    /// Shapes placed by the demo driver on startup
    pub circle_count: u32,
    pub square_count: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,

            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,

            circle_radius: DEFAULT_CIRCLE_RADIUS,
            square_size: DEFAULT_SQUARE_SIZE,
            circle_color: Color::WHITE,
            random_circle_colors: true,
            square_color: Color::RED,

            background_top: Color::new(0x1e, 0x1e, 0x2e),
            background_bottom: Color::new(0x11, 0x11, 0x1b),

            sound_enabled: true,

            circle_count: 8,
            square_count: 4,
        }
    }
}

impl Settings {
    /// Validated viewport built from the configured extents
    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::info!("using default settings ({err})");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
