//! Per-tick update sweep
//!
//! One tick advances every shape once: circles in insertion order, then
//! squares in insertion order. Each shape advances (wall check, gravity,
//! move) and is then tested against every other shape at their current
//! mid-tick positions; on contact only the shape being updated flips both
//! velocity axes. A pair that stays overlapping across both passes flips
//! once per side, and a shape overlapped on two sides flips twice, landing
//! back on its pre-tick velocity.

use super::events::{Axis, BounceEvent};
use super::shape::{BoundaryHit, ShapeId, Viewport};
use super::world::World;
use super::{circle_square_collide, circles_collide, squares_overlap};
use crate::error::{Error, Result};

/// Advance the world by one tick, returning every bounce in the order it
/// was detected
pub fn tick(world: &mut World, gravity: f64, viewport: Viewport) -> Result<Vec<BounceEvent>> {
    if !gravity.is_finite() {
        return Err(Error::InvalidParam("gravity must be finite".into()));
    }

    let mut events = Vec::new();

    for i in 0..world.circles.len() {
        let hit = world.circles[i].advance(gravity, viewport);
        push_wall_events(hit, ShapeId::Circle(world.circles[i].id), &mut events);

        for j in 0..world.circles.len() {
            if i == j {
                continue;
            }
            let (a, b) = (&world.circles[i], &world.circles[j]);
            if circles_collide(a.position, a.radius, b.position, b.radius) {
                let other = ShapeId::Circle(b.id);
                let c = &mut world.circles[i];
                c.velocity = -c.velocity;
                events.push(BounceEvent::Contact {
                    shape: ShapeId::Circle(c.id),
                    other,
                });
            }
        }
        for j in 0..world.squares.len() {
            let (c, s) = (&world.circles[i], &world.squares[j]);
            if circle_square_collide(c.position, c.radius, s.position, s.size) {
                let other = ShapeId::Square(s.id);
                let c = &mut world.circles[i];
                c.velocity = -c.velocity;
                events.push(BounceEvent::Contact {
                    shape: ShapeId::Circle(c.id),
                    other,
                });
            }
        }
    }

    for i in 0..world.squares.len() {
        let hit = world.squares[i].advance(gravity, viewport);
        push_wall_events(hit, ShapeId::Square(world.squares[i].id), &mut events);

        for j in 0..world.squares.len() {
            if i == j {
                continue;
            }
            let (a, b) = (&world.squares[i], &world.squares[j]);
            if squares_overlap(a.position, a.size, b.position, b.size) {
                let other = ShapeId::Square(b.id);
                let s = &mut world.squares[i];
                s.velocity = -s.velocity;
                events.push(BounceEvent::Contact {
                    shape: ShapeId::Square(s.id),
                    other,
                });
            }
        }
        for j in 0..world.circles.len() {
            let (s, c) = (&world.squares[i], &world.circles[j]);
            if circle_square_collide(c.position, c.radius, s.position, s.size) {
                let other = ShapeId::Circle(c.id);
                let s = &mut world.squares[i];
                s.velocity = -s.velocity;
                events.push(BounceEvent::Contact {
                    shape: ShapeId::Square(s.id),
                    other,
                });
            }
        }
    }

    Ok(events)
}

/// X before Y, matching the per-axis order of the wall check
fn push_wall_events(hit: BoundaryHit, shape: ShapeId, events: &mut Vec<BounceEvent>) {
    if hit.x {
        events.push(BounceEvent::Wall { shape, axis: Axis::X });
    }
    if hit.y {
        events.push(BounceEvent::Wall { shape, axis: Axis::Y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use glam::DVec2;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_tick_rejects_non_finite_gravity() {
        let mut world = World::with_seed(1);
        assert!(matches!(
            tick(&mut world, f64::NAN, viewport()),
            Err(Error::InvalidParam(_))
        ));
    }

    #[test]
    fn test_empty_world_tick_is_a_no_op() {
        let mut world = World::with_seed(1);
        let events = tick(&mut world, 0.2, viewport()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_wall_bounce_emits_per_axis_events() {
        let mut world = World::with_seed(1);
        let id = world
            .add_circle(
                10.0,
                Some(DVec2::new(5.0, 5.0)),
                Some(DVec2::new(-3.0, -3.0)),
                Color::WHITE,
                viewport(),
            )
            .unwrap();

        let events = tick(&mut world, 0.0, viewport()).unwrap();
        assert_eq!(
            events,
            vec![
                BounceEvent::Wall {
                    shape: ShapeId::Circle(id),
                    axis: Axis::X,
                },
                BounceEvent::Wall {
                    shape: ShapeId::Circle(id),
                    axis: Axis::Y,
                },
            ]
        );
    }

    #[test]
    fn test_middle_of_a_row_keeps_its_velocity() {
        // The moving middle circle overlaps a stationary neighbor on each
        // side. Two flips in one pass put it right back on its pre-contact
        // velocity.
        let mut world = World::with_seed(1);
        let v = viewport();
        world
            .add_circle(10.0, Some(DVec2::new(100.0, 300.0)), Some(DVec2::ZERO), Color::WHITE, v)
            .unwrap();
        let mid = world
            .add_circle(
                10.0,
                Some(DVec2::new(115.0, 300.0)),
                Some(DVec2::new(1.0, 2.0)),
                Color::WHITE,
                v,
            )
            .unwrap();
        world
            .add_circle(10.0, Some(DVec2::new(130.0, 300.0)), Some(DVec2::ZERO), Color::WHITE, v)
            .unwrap();

        tick(&mut world, 0.0, v).unwrap();

        let middle = &world.circles()[1];
        assert_eq!(middle.id, mid);
        assert_eq!(middle.velocity, DVec2::new(1.0, 2.0));
        assert_eq!(middle.position, DVec2::new(116.0, 302.0));
    }

    #[test]
    fn test_contact_flips_only_the_updated_shape() {
        // A circle resting on a stationary square far from any wall. The
        // circle pass flips the circle; the square pass then flips the
        // square on the same overlap.
        let mut world = World::with_seed(1);
        let v = viewport();
        let c = world
            .add_circle(
                10.0,
                Some(DVec2::new(400.0, 300.0)),
                Some(DVec2::new(0.5, 0.5)),
                Color::WHITE,
                v,
            )
            .unwrap();
        let s = world
            .add_square(
                30.0,
                Some(DVec2::new(395.0, 305.0)),
                Some(DVec2::ZERO),
                Color::RED,
                v,
            )
            .unwrap();

        let events = tick(&mut world, 0.0, v).unwrap();

        assert_eq!(world.circles()[0].velocity, DVec2::new(-0.5, -0.5));
        assert_eq!(world.squares()[0].velocity, DVec2::ZERO);
        assert_eq!(
            events,
            vec![
                BounceEvent::Contact {
                    shape: ShapeId::Circle(c),
                    other: ShapeId::Square(s),
                },
                BounceEvent::Contact {
                    shape: ShapeId::Square(s),
                    other: ShapeId::Circle(c),
                },
            ]
        );
    }

    #[test]
    fn test_circles_update_before_squares() {
        let mut world = World::with_seed(1);
        let v = viewport();
        // Square added first; its wall bounce still comes after the
        // circle's.
        let s = world
            .add_square(
                20.0,
                Some(DVec2::new(785.0, 300.0)),
                Some(DVec2::new(3.0, 0.0)),
                Color::RED,
                v,
            )
            .unwrap();
        let c = world
            .add_circle(
                10.0,
                Some(DVec2::new(5.0, 300.0)),
                Some(DVec2::new(-3.0, 0.0)),
                Color::WHITE,
                v,
            )
            .unwrap();

        let events = tick(&mut world, 0.0, v).unwrap();
        assert_eq!(
            events,
            vec![
                BounceEvent::Wall {
                    shape: ShapeId::Circle(c),
                    axis: Axis::X,
                },
                BounceEvent::Wall {
                    shape: ShapeId::Square(s),
                    axis: Axis::X,
                },
            ]
        );
    }

    #[test]
    fn test_gravity_accumulates_across_ticks() {
        let mut world = World::with_seed(1);
        let v = viewport();
        world
            .add_circle(
                10.0,
                Some(DVec2::new(400.0, 100.0)),
                Some(DVec2::ZERO),
                Color::WHITE,
                v,
            )
            .unwrap();

        for _ in 0..3 {
            tick(&mut world, 0.5, v).unwrap();
        }

        let circle = &world.circles()[0];
        // Velocity grows 0.5 per tick; positions apply 0.5, 1.0, 1.5.
        assert_eq!(circle.velocity, DVec2::new(0.0, 1.5));
        assert_eq!(circle.position, DVec2::new(400.0, 103.0));
    }
}
