//! Bounce Box - a gravity-and-bounce 2D shape sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, collisions, world state)
//! - `render`: Drawing-surface interface for frontends
//! - `audio`: Collision-sound triggers gated by the sound toggle
//! - `settings`: Persisted sandbox preferences
//! - `color`: RGB colors with `#rrggbb` parsing
//! - `error`: Crate error type

pub mod audio;
pub mod color;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::{Error, Result};
pub use settings::Settings;

/// Sandbox configuration constants
pub mod consts {
    /// Default viewport extent, pixels
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;

    /// Default downward acceleration added to vertical velocity each tick
    pub const DEFAULT_GRAVITY: f64 = 0.2;

    /// Spawn velocity bound: each axis starts uniform in [-SPAWN_SPEED, SPAWN_SPEED)
    pub const SPAWN_SPEED: f64 = 2.0;

    /// Default extents for newly spawned shapes
    pub const DEFAULT_CIRCLE_RADIUS: f64 = 20.0;
    pub const DEFAULT_SQUARE_SIZE: f64 = 30.0;
}
