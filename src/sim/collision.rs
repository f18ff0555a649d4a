//! Collision predicates between shape pairs
//!
//! Pure geometric tests: O(1), allocation-free, no mutation. Every predicate
//! is symmetric, so `collides(a, b) == collides(b, a)` for any pair.

use glam::DVec2;

use super::shape::ShapeRef;

/// True iff two circles overlap
///
/// Strict inequality: circles whose rims exactly touch do not collide.
#[inline]
pub fn circles_collide(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// True iff two axis-aligned squares overlap, given top-left corners
#[inline]
pub fn squares_overlap(a: DVec2, a_size: f64, b: DVec2, b_size: f64) -> bool {
    a.x < b.x + b_size && a.x + a_size > b.x && a.y < b.y + b_size && a.y + a_size > b.y
}

/// True iff a circle overlaps an axis-aligned square
///
/// Closest-point test against the square center: reject outright when the
/// center is beyond `half + radius` on either axis, accept when its
/// projection falls inside the square's slab on either axis, otherwise the
/// nearest corner decides.
pub fn circle_square_collide(center: DVec2, radius: f64, top_left: DVec2, size: f64) -> bool {
    let half = size / 2.0;
    let dist = (center - top_left - DVec2::splat(half)).abs();

    if dist.x > half + radius || dist.y > half + radius {
        return false;
    }
    if dist.x <= half || dist.y <= half {
        return true;
    }

    let corner = dist - DVec2::splat(half);
    corner.length_squared() <= radius * radius
}

/// Variant-dispatching predicate over any two shapes
pub fn collides(a: ShapeRef<'_>, b: ShapeRef<'_>) -> bool {
    match (a, b) {
        (ShapeRef::Circle(a), ShapeRef::Circle(b)) => {
            circles_collide(a.position, a.radius, b.position, b.radius)
        }
        (ShapeRef::Square(a), ShapeRef::Square(b)) => {
            squares_overlap(a.position, a.size, b.position, b.size)
        }
        (ShapeRef::Circle(c), ShapeRef::Square(s)) | (ShapeRef::Square(s), ShapeRef::Circle(c)) => {
            circle_square_collide(c.position, c.radius, s.position, s.size)
        }
    }
}
