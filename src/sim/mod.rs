//! Deterministic simulation module
//!
//! All motion and collision logic lives here. This module must be pure and
//! deterministic:
//! - Fixed per-tick updates only
//! - Seeded RNG only
//! - Stable processing order (insertion order, circles before squares)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod shape;
pub mod tick;
pub mod world;

pub use collision::{circle_square_collide, circles_collide, collides, squares_overlap};
pub use events::{Axis, BounceEvent};
pub use shape::{BoundaryHit, Circle, CircleId, ShapeId, ShapeRef, Square, SquareId, Viewport};
pub use tick::tick;
pub use world::World;
