//! Boolean collision predicate

use super::shape::Hitbox;
use super::solid::Reduced;

impl Hitbox {
    /// Whether the two hitboxes overlap
    ///
    /// Circle and rectangle pairs are tested exactly; touching boundaries do
    /// not count as overlap. A polygon is tested as its bounding rectangle,
    /// which can report overlap where the true polygon has none. A group
    /// collides when any of its children does.
    pub fn collides_with(&self, other: &Self) -> bool {
        reduced_overlap(self.reduce(), other.reduce())
    }
}

fn reduced_overlap(a: Reduced<'_>, b: Reduced<'_>) -> bool {
    a.solids().any(|first| b.solids().any(|second| first.overlaps(&second)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{Circle, Group, GroupChild, Polygon, Rectangle};
    use crate::foundation::math::Vec2;

    fn circle(radius: f32, x: f32, y: f32) -> Circle {
        Circle::new(radius, Vec2::new(x, y)).unwrap()
    }

    fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rectangle {
        Rectangle::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y)).unwrap()
    }

    #[test]
    fn test_circle_circle() {
        let a = Hitbox::from(circle(5.0, 0.0, 0.0));
        assert!(a.collides_with(&Hitbox::from(circle(5.0, 8.0, 0.0))));
        assert!(!a.collides_with(&Hitbox::from(circle(5.0, 10.0, 0.0))));
    }

    #[test]
    fn test_circle_rectangle() {
        let r = Hitbox::from(rect(0.0, 0.0, 10.0, 10.0));
        assert!(r.collides_with(&Hitbox::from(circle(1.0, 10.5, 5.0))));
        assert!(Hitbox::from(circle(1.0, 10.5, 5.0)).collides_with(&r));
        assert!(!r.collides_with(&Hitbox::from(circle(1.0, 12.0, 5.0))));
        // Fully inside
        assert!(r.collides_with(&Hitbox::from(circle(1.0, 5.0, 5.0))));
    }

    #[test]
    fn test_rectangle_rectangle() {
        let a = Hitbox::from(rect(0.0, 0.0, 10.0, 10.0));
        assert!(a.collides_with(&Hitbox::from(rect(5.0, 5.0, 15.0, 15.0))));
        assert!(!a.collides_with(&Hitbox::from(rect(5.0, 11.0, 15.0, 15.0))));
    }

    #[test]
    fn test_polygon_uses_bounding_rectangle() {
        // Right triangle; the point (9, 9) region is empty but inside its bounds
        let triangle = Hitbox::from(
            Polygon::from_points(vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)]).unwrap(),
        );
        let probe = Hitbox::from(circle(0.5, 9.0, 9.0));

        assert!(!triangle.contains_point(Vec2::new(9.0, 9.0)));
        assert!(triangle.collides_with(&probe));
        assert!(probe.collides_with(&triangle));
    }

    #[test]
    fn test_group_collides_if_any_child_does() {
        let group = Hitbox::from(
            Group::new(vec![
                GroupChild::Circle(circle(1.0, 0.0, 0.0)),
                GroupChild::Rectangle(rect(10.0, 0.0, 12.0, 2.0)),
            ])
            .unwrap(),
        );

        let near_rect = Hitbox::from(circle(1.0, 13.0, 1.0));
        let between = Hitbox::from(circle(1.0, 5.0, 0.0));

        assert!(group.collides_with(&near_rect));
        assert!(near_rect.collides_with(&group));
        assert!(!group.collides_with(&between));
        assert!(!between.collides_with(&group));
    }

    #[test]
    fn test_group_against_group() {
        let a = Hitbox::from(Group::new(vec![GroupChild::Circle(circle(1.0, 0.0, 0.0))]).unwrap());
        let b = Hitbox::from(
            Group::new(vec![
                GroupChild::Circle(circle(1.0, 10.0, 0.0)),
                GroupChild::Circle(circle(1.0, 1.5, 0.0)),
            ])
            .unwrap(),
        );
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }
}
