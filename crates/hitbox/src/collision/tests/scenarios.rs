//! Worked examples with hand-checked answers

use super::{circle, group, rect};
use crate::collision::{Hitbox, HitboxKind};
use crate::foundation::math::{constants::HALF_PI, Vec2};
use approx::assert_relative_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles() {
        let a = circle(5.0, 0.0, 0.0);
        let b = circle(5.0, 8.0, 0.0);

        assert!(a.collides_with(&b));
        assert_relative_eq!(a.distance_to(&b).distance, 0.0);

        let adjustment = a.adjustment(&b, 1.0);
        assert_relative_eq!(adjustment.norm(), 2.0, epsilon = 1e-4);
        assert_relative_eq!(adjustment.y, 0.0);
    }

    #[test]
    fn test_overlapping_rectangles() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 15.0, 15.0);

        assert!(a.collides_with(&b));

        let penetration = a.penetration(&b).unwrap();
        assert_relative_eq!(penetration.depth, 5.0, epsilon = 1e-4);
        // Both axes overlap by 5; ties resolve along x
        assert_eq!(penetration.direction, Vec2::new(-1.0, 0.0));
        assert!(!a.translated(a.adjustment(&b, 1.0)).collides_with(&b));
    }

    #[test]
    fn test_rectangle_quarter_turn_about_center() {
        let template = rect(-3.0, -1.0, 3.0, 1.0);
        let position = Vec2::new(2.0, -4.0);
        let placed = template.transform_rotate(position, 1.0, HALF_PI).unwrap();

        assert_eq!(placed.kind(), HitboxKind::Polygon);
        let Hitbox::Polygon(polygon) = placed else {
            unreachable!();
        };

        let Hitbox::Rectangle(model) = template else {
            unreachable!();
        };
        // Rotating (x, y) by 90 degrees gives (-y, x)
        for (corner, model_corner) in polygon.points().iter().zip(model.corners()) {
            let expected = position + Vec2::new(-model_corner.y, model_corner.x);
            assert_relative_eq!(*corner, expected, epsilon = 1e-5);
        }
        assert_relative_eq!(polygon.center(), position, epsilon = 1e-5);
    }

    #[test]
    fn test_group_with_single_touching_child() {
        let near = circle(1.0, 10.0, 0.0);
        let players = group(vec![circle(1.0, 0.0, 0.0), near.clone()]);
        let probe = circle(1.0, 11.5, 0.0);

        assert!(players.collides_with(&probe));
        assert_eq!(players.adjustment(&probe, 1.0), near.adjustment(&probe, 1.0));
        assert_eq!(probe.adjustment(&players, 1.0), probe.adjustment(&near, 1.0));
    }
}
