//! Events returned by a simulation tick
//!
//! The simulation never performs side effects; anything that should make a
//! sound is reported as a [`BounceEvent`] for the embedding frontend to act
//! on (or ignore).

use super::shape::ShapeId;

/// Viewport boundary axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One sound-worthy moment during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceEvent {
    /// A shape's leading edge crossed the viewport boundary and its
    /// velocity flipped on `axis`
    Wall { shape: ShapeId, axis: Axis },
    /// A shape contacted another shape and reversed both velocity axes
    Contact { shape: ShapeId, other: ShapeId },
}

impl BounceEvent {
    /// The shape whose velocity the event flipped
    pub fn shape(&self) -> ShapeId {
        match self {
            BounceEvent::Wall { shape, .. } | BounceEvent::Contact { shape, .. } => *shape,
        }
    }
}
