//! Frame drawing
//!
//! Walks the world in draw order and hands primitives to a [`Surface`].
//! The surface clears to a vertical gradient first, then shapes paint over
//! it: circles in insertion order, then squares, so later shapes cover
//! earlier ones.

use glam::DVec2;

use crate::color::Color;
use crate::sim::{ShapeRef, World};

/// Drawing backend for one frame
pub trait Surface {
    /// Fill the whole viewport with a top-to-bottom gradient
    fn clear(&mut self, top: Color, bottom: Color);
    /// Fill a circle given its center
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    /// Fill an axis-aligned square given its top-left corner
    fn fill_square(&mut self, top_left: DVec2, size: f64, color: Color);
}

/// Draw one frame of the world
pub fn draw(
    world: &World,
    background_top: Color,
    background_bottom: Color,
    surface: &mut dyn Surface,
) {
    surface.clear(background_top, background_bottom);
    for shape in world.shapes() {
        match shape {
            ShapeRef::Circle(circle) => {
                surface.fill_circle(circle.position, circle.radius, circle.color);
            }
            ShapeRef::Square(square) => {
                surface.fill_square(square.position, square.size, square.color);
            }
        }
    }
}
