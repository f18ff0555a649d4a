//! Shape data and per-tick kinematics
//!
//! Circles are positioned by center, squares by top-left corner. Each tick a
//! shape first checks the viewport boundary against the position it is about
//! to reach, flipping the offending velocity axis, then gains gravity and
//! moves. The check-before-move order means a shape heading out this tick
//! turns around instead of leaving the viewport.

use glam::DVec2;

use crate::color::Color;
use crate::error::{Error, Result};

/// Identifier of a circle within its [`World`](super::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleId(pub u32);

/// Identifier of a square within its [`World`](super::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareId(pub u32);

/// Identifier of any shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Circle(CircleId),
    Square(SquareId),
}

/// Simulation bounds that shapes bounce inside
///
/// Constructed per frame by the embedding frontend, so a resize simply shows
/// up as a different extent on the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Validated constructor; both extents must be finite and positive
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidParam(
                "viewport extent must be finite and > 0".into(),
            ));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Which axes bounced off the boundary during one advance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHit {
    pub x: bool,
    pub y: bool,
}

/// A circle, positioned by center
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: CircleId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Color,
    /// Volume-derived mass, carried for a future impulse response but not
    /// consumed by the velocity-negation response
    pub mass: f64,
}

impl Circle {
    /// Plain constructor; parameter validation happens in `World::add_circle`
    pub fn new(id: CircleId, position: DVec2, velocity: DVec2, radius: f64, color: Color) -> Self {
        let mass = 4.0 / 3.0 * std::f64::consts::PI * radius.powi(3);
        Self {
            id,
            position,
            velocity,
            radius,
            color,
            mass,
        }
    }

    /// Advance one tick: bounce off walls, gain gravity, move
    ///
    /// The center stays within `[radius, extent - radius]` on both axes.
    pub fn advance(&mut self, gravity: f64, viewport: Viewport) -> BoundaryHit {
        let min = DVec2::splat(self.radius);
        let max = DVec2::new(
            viewport.width() - self.radius,
            viewport.height() - self.radius,
        );
        let hit = bounce_off_walls(self.position, &mut self.velocity, min, max);
        self.velocity.y += gravity;
        self.position += self.velocity;
        hit
    }
}

/// An axis-aligned square, positioned by top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub id: SquareId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub color: Color,
}

impl Square {
    /// Plain constructor; parameter validation happens in `World::add_square`
    pub fn new(id: SquareId, position: DVec2, velocity: DVec2, size: f64, color: Color) -> Self {
        Self {
            id,
            position,
            velocity,
            size,
            color,
        }
    }

    /// Advance one tick: bounce off walls, gain gravity, move
    ///
    /// The corner stays within `[0, extent - size]`: the min edge ignores the
    /// shape extent while the max edge subtracts it. That asymmetry with the
    /// circle margins is a deliberate boundary policy, kept as-is.
    pub fn advance(&mut self, gravity: f64, viewport: Viewport) -> BoundaryHit {
        let min = DVec2::ZERO;
        let max = DVec2::new(viewport.width() - self.size, viewport.height() - self.size);
        let hit = bounce_off_walls(self.position, &mut self.velocity, min, max);
        self.velocity.y += gravity;
        self.position += self.velocity;
        hit
    }
}

/// Flip velocity on each axis whose tentative position leaves `[min, max]`
///
/// Uses the position the shape would reach with its current velocity, before
/// gravity lands on it. Comparisons are strict: sitting exactly on an edge
/// does not bounce.
fn bounce_off_walls(position: DVec2, velocity: &mut DVec2, min: DVec2, max: DVec2) -> BoundaryHit {
    let tentative = position + *velocity;
    let mut hit = BoundaryHit::default();
    if tentative.x > max.x || tentative.x < min.x {
        velocity.x = -velocity.x;
        hit.x = true;
    }
    if tentative.y > max.y || tentative.y < min.y {
        velocity.y = -velocity.y;
        hit.y = true;
    }
    hit
}

/// Borrowed view over either shape variant
///
/// Lets the collision dispatcher and the draw pass treat the two categories
/// uniformly without giving up the concrete types.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Circle(&'a Circle),
    Square(&'a Square),
}

impl ShapeRef<'_> {
    pub fn id(&self) -> ShapeId {
        match self {
            ShapeRef::Circle(c) => ShapeId::Circle(c.id),
            ShapeRef::Square(s) => ShapeId::Square(s.id),
        }
    }

    /// Reference point: center for circles, top-left corner for squares
    pub fn position(&self) -> DVec2 {
        match self {
            ShapeRef::Circle(c) => c.position,
            ShapeRef::Square(s) => s.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ShapeRef::Circle(c) => c.color,
            ShapeRef::Square(s) => s.color,
        }
    }
}
