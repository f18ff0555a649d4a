//! World state owning every shape
//!
//! Two append-only sequences, circles and squares; insertion order is both
//! the processing order and the draw order. Spawn randomization draws from a
//! seeded RNG so any run can be replayed from its seed.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Color;
use crate::consts::SPAWN_SPEED;
use crate::error::{Error, Result};

use super::shape::{Circle, CircleId, ShapeRef, Square, SquareId, Viewport};

/// All simulated shapes plus the spawn RNG
#[derive(Clone)]
pub struct World {
    pub(crate) circles: Vec<Circle>,
    pub(crate) squares: Vec<Square>,
    rng: Pcg32,
    seed: u64,
    next_id: u32,
}

impl World {
    /// Empty world seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Empty world with a fixed seed for reproducible spawns
    pub fn with_seed(seed: u64) -> Self {
        Self {
            circles: Vec::new(),
            squares: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            next_id: 1,
        }
    }

    /// Seed this world was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Allocate the next shape id
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a circle, randomizing whatever the caller leaves out
    ///
    /// A random position lands uniformly in `[radius, extent - radius]` per
    /// axis; a random velocity in `[-2, 2)` per axis. Caller-supplied
    /// positions are taken as-is (they may start outside the margin band and
    /// will bounce back in), but every number must be finite.
    pub fn add_circle(
        &mut self,
        radius: f64,
        position: Option<DVec2>,
        velocity: Option<DVec2>,
        color: Color,
        viewport: Viewport,
    ) -> Result<CircleId> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if radius * 2.0 > viewport.width() || radius * 2.0 > viewport.height() {
            return Err(Error::InvalidParam(
                "circle does not fit the viewport".into(),
            ));
        }
        let position = match position {
            Some(p) => checked_finite(p, "position")?,
            None => DVec2::new(
                self.rng.random_range(radius..=viewport.width() - radius),
                self.rng.random_range(radius..=viewport.height() - radius),
            ),
        };
        let velocity = match velocity {
            Some(v) => checked_finite(v, "velocity")?,
            None => random_velocity(&mut self.rng),
        };

        let id = CircleId(self.next_entity_id());
        self.circles
            .push(Circle::new(id, position, velocity, radius, color));
        Ok(id)
    }

    /// Add a square, randomizing whatever the caller leaves out
    ///
    /// A random position lands uniformly in `[0, extent - size]` per axis.
    pub fn add_square(
        &mut self,
        size: f64,
        position: Option<DVec2>,
        velocity: Option<DVec2>,
        color: Color,
        viewport: Viewport,
    ) -> Result<SquareId> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidParam("size must be finite and > 0".into()));
        }
        if size > viewport.width() || size > viewport.height() {
            return Err(Error::InvalidParam(
                "square does not fit the viewport".into(),
            ));
        }
        let position = match position {
            Some(p) => checked_finite(p, "position")?,
            None => DVec2::new(
                self.rng.random_range(0.0..=viewport.width() - size),
                self.rng.random_range(0.0..=viewport.height() - size),
            ),
        };
        let velocity = match velocity {
            Some(v) => checked_finite(v, "velocity")?,
            None => random_velocity(&mut self.rng),
        };

        let id = SquareId(self.next_entity_id());
        self.squares
            .push(Square::new(id, position, velocity, size, color));
        Ok(id)
    }

    /// Circles in insertion order
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Squares in insertion order
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Every shape in draw order: circles first, then squares
    pub fn shapes(&self) -> impl Iterator<Item = ShapeRef<'_>> {
        self.circles
            .iter()
            .map(ShapeRef::Circle)
            .chain(self.squares.iter().map(ShapeRef::Square))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn velocity, uniform in `[-SPAWN_SPEED, SPAWN_SPEED)` per axis
fn random_velocity(rng: &mut Pcg32) -> DVec2 {
    DVec2::new(
        rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
        rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
    )
}

fn checked_finite(v: DVec2, what: &str) -> Result<DVec2> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Error::InvalidParam(format!("{what} must be finite")))
    }
}
