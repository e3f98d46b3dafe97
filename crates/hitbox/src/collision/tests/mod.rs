//! Cross-module tests for the collision queries
//!
//! Per-operation unit tests live next to each operation; these exercise
//! the queries together across every shape kind.

mod scenarios;

use crate::collision::{Circle, Group, Hitbox, Polygon, Rectangle};
use crate::foundation::math::Vec2;

pub(super) fn circle(radius: f32, x: f32, y: f32) -> Hitbox {
    Hitbox::from(Circle::new(radius, Vec2::new(x, y)).unwrap())
}

pub(super) fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Hitbox {
    Hitbox::from(Rectangle::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y)).unwrap())
}

pub(super) fn triangle(x: f32, y: f32) -> Hitbox {
    Hitbox::from(
        Polygon::from_points(vec![Vec2::new(x, y), Vec2::new(x + 2.0, y), Vec2::new(x + 1.0, y + 2.0)]).unwrap(),
    )
}

pub(super) fn group(children: Vec<Hitbox>) -> Hitbox {
    Hitbox::from(Group::from_hitboxes(children).unwrap())
}

/// One or more shapes of every kind, spread so that some pairs overlap
pub(super) fn zoo() -> Vec<Hitbox> {
    vec![
        circle(1.0, 0.0, 0.0),
        circle(2.5, 3.0, 1.0),
        rect(-1.0, -1.0, 1.5, 0.5),
        rect(4.0, 4.0, 6.0, 7.0),
        triangle(0.5, 0.0),
        triangle(10.0, 10.0),
        group(vec![circle(1.0, 5.0, 5.0), rect(-3.0, 2.0, -2.0, 3.0)]),
        group(vec![triangle(-1.0, -1.0), circle(0.5, 20.0, 0.0)]),
    ]
}

#[test]
fn test_zoo_covers_every_kind() {
    use crate::collision::HitboxKind;
    let kinds: Vec<_> = zoo().iter().map(Hitbox::kind).collect();
    for kind in [HitboxKind::Circle, HitboxKind::Rectangle, HitboxKind::Polygon, HitboxKind::Group] {
        assert!(kinds.contains(&kind), "no {} in zoo", kind);
    }
}
