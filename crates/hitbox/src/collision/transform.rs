//! Model-space to world-space transformation
//!
//! Hitbox templates are stored in model space and turned into a fresh
//! world-space hitbox whenever they are tested, following the same split the
//! 3D collision shapes use. Two flavours exist:
//!
//! - [`Hitbox::transform`] takes a discrete [`Orientation`] (multiples of
//!   90 degrees) for map objects. Rectangles stay rectangles.
//! - [`Hitbox::transform_rotate`] takes an arbitrary angle for moving
//!   entities. Rectangles become polygons, since a rotated box is no longer
//!   axis-aligned.
//!
//! Both apply scale, then rotation about the model origin, then translation.

use serde::{Deserialize, Serialize};

use super::error::{ConstructionError, HitboxError};
use super::primitives::{Circle, Polygon, Rectangle};
use super::shape::{Group, GroupChild, Hitbox};
use crate::foundation::math::{constants::HALF_PI, Vec2, Vec2Ext};

/// Rotation in quarter turns, counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// No rotation
    #[default]
    R0,
    /// 90 degrees
    R90,
    /// 180 degrees
    R180,
    /// 270 degrees
    R270,
}

impl Orientation {
    /// Number of quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Equivalent continuous rotation
    pub fn radians(self) -> f32 {
        f32::from(self.quarter_turns()) * HALF_PI
    }

    /// Rotate a vector exactly, without trigonometry
    pub fn rotate(self, v: Vec2) -> Vec2 {
        match self {
            Self::R0 => v,
            Self::R90 => Vec2::new(-v.y, v.x),
            Self::R180 => Vec2::new(-v.x, -v.y),
            Self::R270 => Vec2::new(v.y, -v.x),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = u8;

    fn try_from(turns: u8) -> Result<Self, Self::Error> {
        match turns {
            0 => Ok(Self::R0),
            1 => Ok(Self::R90),
            2 => Ok(Self::R180),
            3 => Ok(Self::R270),
            other => Err(other),
        }
    }
}

/// Scale, rotation and translation applied to model-space points
struct Placement<R> {
    position: Vec2,
    scale: f32,
    rotate: R,
}

impl<R: Fn(Vec2) -> Vec2> Placement<R> {
    fn new(position: Vec2, scale: f32, rotate: R) -> Self {
        Self { position, scale, rotate }
    }

    fn apply(&self, point: Vec2) -> Vec2 {
        self.position + (self.rotate)(point * self.scale)
    }

    fn circle(&self, circle: &Circle) -> Circle {
        Circle::new_unchecked(circle.radius() * self.scale, self.apply(circle.position()))
    }

    fn polygon(&self, polygon: &Polygon) -> Polygon {
        Polygon::new_unchecked(
            polygon.points().iter().map(|p| self.apply(*p)).collect(),
            self.apply(polygon.center()),
        )
    }

    /// Rectangle whose corners are placed independently; only valid for rotations that keep axes aligned
    fn aligned_rectangle(&self, rect: &Rectangle) -> Rectangle {
        Rectangle::enclosing(&[self.apply(rect.min()), self.apply(rect.max())])
    }

    /// Rectangle turned into the polygon of its placed corners
    fn rotated_rectangle(&self, rect: &Rectangle) -> Polygon {
        Polygon::new_unchecked(
            rect.corners().iter().map(|p| self.apply(*p)).collect(),
            self.apply(rect.center()),
        )
    }
}

impl Hitbox {
    fn check_placement(&self, position: Vec2, scale: f32) -> Result<(), ConstructionError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ConstructionError::InvalidScale(scale));
        }
        if !position.is_finite() {
            return Err(ConstructionError::NonFinite(self.kind()));
        }
        Ok(())
    }

    /// Place a model-space hitbox using a quarter-turn orientation
    ///
    /// # Errors
    ///
    /// [`ConstructionError::InvalidScale`] when `scale` is not positive and
    /// finite, [`ConstructionError::NonFinite`] when `position` is not finite.
    pub fn transform(&self, position: Vec2, scale: f32, orientation: Orientation) -> Result<Self, HitboxError> {
        self.check_placement(position, scale)?;
        let placement = Placement::new(position, scale, move |v: Vec2| orientation.rotate(v));
        let place = |child: &GroupChild| match child {
            GroupChild::Circle(circle) => GroupChild::Circle(placement.circle(circle)),
            GroupChild::Rectangle(rect) => GroupChild::Rectangle(placement.aligned_rectangle(rect)),
            GroupChild::Polygon(polygon) => GroupChild::Polygon(placement.polygon(polygon)),
        };

        Ok(match self {
            Self::Circle(circle) => Self::Circle(placement.circle(circle)),
            Self::Rectangle(rect) => Self::Rectangle(placement.aligned_rectangle(rect)),
            Self::Polygon(polygon) => Self::Polygon(placement.polygon(polygon)),
            Self::Group(group) => Self::Group(Group::new_unchecked(
                group.children().iter().map(place).collect(),
                position,
            )),
        })
    }

    /// Place a model-space hitbox using an arbitrary rotation in radians
    ///
    /// A rectangle comes back as a four-point [`Polygon`] whose center hint is
    /// the placed rectangle center, including rectangles inside groups.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::InvalidScale`] when `scale` is not positive and
    /// finite, [`ConstructionError::NonFinite`] when `position` is not finite.
    pub fn transform_rotate(&self, position: Vec2, scale: f32, rotation: f32) -> Result<Self, HitboxError> {
        self.check_placement(position, scale)?;
        let placement = Placement::new(position, scale, move |v: Vec2| v.rotated(rotation));
        let place = |child: &GroupChild| match child {
            GroupChild::Circle(circle) => GroupChild::Circle(placement.circle(circle)),
            GroupChild::Rectangle(rect) => GroupChild::Polygon(placement.rotated_rectangle(rect)),
            GroupChild::Polygon(polygon) => GroupChild::Polygon(placement.polygon(polygon)),
        };

        Ok(match self {
            Self::Circle(circle) => Self::Circle(placement.circle(circle)),
            Self::Rectangle(rect) => Self::Polygon(placement.rotated_rectangle(rect)),
            Self::Polygon(polygon) => Self::Polygon(placement.polygon(polygon)),
            Self::Group(group) => Self::Group(Group::new_unchecked(
                group.children().iter().map(place).collect(),
                position,
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::HitboxKind;
    use crate::foundation::math::constants::PI;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f32 = 1e-5;

    fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rectangle {
        Rectangle::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y)).unwrap()
    }

    #[test]
    fn test_orientation_matches_continuous_rotation() {
        let v = Vec2::new(3.0, 1.0);
        for turns in 0..4_u8 {
            let orientation = Orientation::try_from(turns).unwrap();
            assert_relative_eq!(orientation.rotate(v), v.rotated(orientation.radians()), epsilon = EPSILON);
        }
        assert_eq!(Orientation::try_from(4), Err(4));
    }

    #[test]
    fn test_discrete_transform_keeps_rectangle() {
        let template = Hitbox::from(rect(0.0, 0.0, 4.0, 2.0));
        let placed = template.transform(Vec2::new(10.0, 10.0), 1.0, Orientation::R90).unwrap();

        // (0,0)-(4,2) turned a quarter becomes (-2,0)-(0,4)
        assert_eq!(placed, Hitbox::from(rect(8.0, 10.0, 10.0, 14.0)));
    }

    #[test]
    fn test_discrete_transform_scales_circle() {
        let template = Hitbox::from(Circle::new(2.0, Vec2::new(1.0, 0.0)).unwrap());
        let placed = template.transform(Vec2::new(5.0, 5.0), 2.0, Orientation::R180).unwrap();

        let Hitbox::Circle(circle) = placed else {
            panic!("circle changed kind");
        };
        assert_relative_eq!(circle.radius(), 4.0);
        assert_relative_eq!(circle.position(), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_continuous_rotation_turns_rectangle_into_polygon() {
        let template = Hitbox::from(rect(-2.0, -1.0, 2.0, 1.0));
        let placed = template.transform_rotate(Vec2::new(5.0, 5.0), 1.0, PI / 2.0).unwrap();

        assert_eq!(placed.kind(), HitboxKind::Polygon);
        let Hitbox::Polygon(polygon) = placed else {
            unreachable!();
        };
        let expected = [
            Vec2::new(6.0, 3.0),
            Vec2::new(6.0, 7.0),
            Vec2::new(4.0, 7.0),
            Vec2::new(4.0, 3.0),
        ];
        for (corner, expected) in polygon.points().iter().zip(expected) {
            assert_relative_eq!(*corner, expected, epsilon = EPSILON);
        }
        assert_relative_eq!(polygon.center(), Vec2::new(5.0, 5.0), epsilon = EPSILON);
    }

    #[test]
    fn test_group_transform_records_position() {
        let template = Hitbox::from(
            Group::new(vec![
                GroupChild::Rectangle(rect(0.0, 0.0, 1.0, 1.0)),
                GroupChild::Circle(Circle::new(1.0, Vec2::new(3.0, 0.0)).unwrap()),
            ])
            .unwrap(),
        );

        let Hitbox::Group(placed) = template.transform(Vec2::new(1.0, 2.0), 1.0, Orientation::R0).unwrap() else {
            panic!("group changed kind");
        };
        assert_eq!(placed.position(), Vec2::new(1.0, 2.0));
        assert_eq!(placed.children()[0], GroupChild::Rectangle(rect(1.0, 2.0, 2.0, 3.0)));

        let Hitbox::Group(rotated) = template.transform_rotate(Vec2::zeros(), 1.0, 0.3).unwrap() else {
            panic!("group changed kind");
        };
        assert!(matches!(rotated.children()[0], GroupChild::Polygon(_)));
        assert!(matches!(rotated.children()[1], GroupChild::Circle(_)));
    }

    #[test]
    fn test_zero_rotation_polygon_matches_rectangle_corners() {
        let template = Hitbox::from(rect(0.0, 0.0, 2.0, 2.0));
        let placed = template.transform_rotate(Vec2::new(1.0, 1.0), 1.0, 0.0).unwrap();
        let Hitbox::Polygon(polygon) = placed else {
            panic!("expected polygon");
        };
        assert_abs_diff_eq!(
            polygon,
            Polygon::new(
                vec![Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0), Vec2::new(3.0, 3.0), Vec2::new(1.0, 3.0)],
                Vec2::new(2.0, 2.0)
            )
            .unwrap(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        let template = Hitbox::from(Circle::new(1.0, Vec2::zeros()).unwrap());
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let error = template.transform(Vec2::zeros(), scale, Orientation::R0).unwrap_err();
            assert!(matches!(error, HitboxError::Construction(ConstructionError::InvalidScale(_))));
            assert!(template.transform_rotate(Vec2::zeros(), scale, 0.0).is_err());
        }
    }
}
