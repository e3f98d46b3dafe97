//! The closed hitbox shape model
//!
//! [`Hitbox`] is a tagged union over the four shape kinds. Groups hold
//! [`GroupChild`] values, which cannot be groups themselves, so nesting is
//! ruled out by the type system rather than checked at run time.

use approx::AbsDiffEq;

use super::error::{ConstructionError, HitboxError, HitboxKind};
use super::primitives::{Circle, Polygon, Rectangle};
use crate::foundation::math::Vec2;

/// A collidable shape
#[derive(Debug, Clone, PartialEq)]
pub enum Hitbox {
    /// Circle
    Circle(Circle),
    /// Axis-aligned rectangle
    Rectangle(Rectangle),
    /// Polygon
    Polygon(Polygon),
    /// Flat group of shapes
    Group(Group),
}

/// A shape allowed inside a [`Group`]
#[derive(Debug, Clone, PartialEq)]
pub enum GroupChild {
    /// Circle
    Circle(Circle),
    /// Axis-aligned rectangle
    Rectangle(Rectangle),
    /// Polygon
    Polygon(Polygon),
}

/// A flat, non-empty collection of shapes acting as one hitbox
///
/// `position` is the reference point the group was last transformed to. It
/// is bookkeeping only: no query reads it, and equality ignores it.
#[derive(Debug, Clone)]
pub struct Group {
    children: Vec<GroupChild>,
    position: Vec2,
}

impl Group {
    /// Creates a group from at least one child
    pub fn new(children: Vec<GroupChild>) -> Result<Self, ConstructionError> {
        if children.is_empty() {
            return Err(ConstructionError::EmptyGroup);
        }
        Ok(Self {
            children,
            position: Vec2::zeros(),
        })
    }

    /// Creates a group from arbitrary hitboxes, refusing nested groups
    pub fn from_hitboxes(hitboxes: Vec<Hitbox>) -> Result<Self, HitboxError> {
        let children = hitboxes
            .into_iter()
            .map(GroupChild::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(children)?)
    }

    pub(crate) fn new_unchecked(children: Vec<GroupChild>, position: Vec2) -> Self {
        Self { children, position }
    }

    /// Child shapes in insertion order
    pub fn children(&self) -> &[GroupChild] {
        &self.children
    }

    /// Reference position recorded by the last transform
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Union of the children's bounding rectangles
    pub fn bounding_rectangle(&self) -> Rectangle {
        let mut children = self.children.iter().map(GroupChild::bounding_rectangle);
        let first = children.next().unwrap_or_else(|| Rectangle::new_unchecked(self.position, self.position));
        children.fold(first, |acc, rect| acc.union(&rect))
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl GroupChild {
    /// Kind of the wrapped shape
    pub const fn kind(&self) -> HitboxKind {
        match self {
            Self::Circle(_) => HitboxKind::Circle,
            Self::Rectangle(_) => HitboxKind::Rectangle,
            Self::Polygon(_) => HitboxKind::Polygon,
        }
    }

    /// Axis-aligned bounding rectangle
    pub fn bounding_rectangle(&self) -> Rectangle {
        match self {
            Self::Circle(circle) => circle.bounding_rectangle(),
            Self::Rectangle(rect) => *rect,
            Self::Polygon(polygon) => polygon.bounding_rectangle(),
        }
    }

    /// Whether `point` lies inside the shape
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(circle) => circle.contains_point(point),
            Self::Rectangle(rect) => rect.contains_point(point),
            Self::Polygon(polygon) => polygon.contains_point(point),
        }
    }

    /// Same shape moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Circle(circle) => Self::Circle(circle.translated(offset)),
            Self::Rectangle(rect) => Self::Rectangle(rect.translated(offset)),
            Self::Polygon(polygon) => Self::Polygon(polygon.translated(offset)),
        }
    }
}

impl TryFrom<Hitbox> for GroupChild {
    type Error = HitboxError;

    fn try_from(hitbox: Hitbox) -> Result<Self, Self::Error> {
        match hitbox {
            Hitbox::Circle(circle) => Ok(Self::Circle(circle)),
            Hitbox::Rectangle(rect) => Ok(Self::Rectangle(rect)),
            Hitbox::Polygon(polygon) => Ok(Self::Polygon(polygon)),
            Hitbox::Group(_) => Err(HitboxError::unsupported("nesting a group inside a group", HitboxKind::Group)),
        }
    }
}

impl From<GroupChild> for Hitbox {
    fn from(child: GroupChild) -> Self {
        match child {
            GroupChild::Circle(circle) => Self::Circle(circle),
            GroupChild::Rectangle(rect) => Self::Rectangle(rect),
            GroupChild::Polygon(polygon) => Self::Polygon(polygon),
        }
    }
}

impl From<Circle> for Hitbox {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Rectangle> for Hitbox {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Polygon> for Hitbox {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Group> for Hitbox {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl Hitbox {
    /// Kind of this hitbox
    pub const fn kind(&self) -> HitboxKind {
        match self {
            Self::Circle(_) => HitboxKind::Circle,
            Self::Rectangle(_) => HitboxKind::Rectangle,
            Self::Polygon(_) => HitboxKind::Polygon,
            Self::Group(_) => HitboxKind::Group,
        }
    }

    /// Representative center point
    ///
    /// Circle position, rectangle midpoint, polygon center hint, or the
    /// midpoint of a group's bounding rectangle.
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Circle(circle) => circle.position(),
            Self::Rectangle(rect) => rect.center(),
            Self::Polygon(polygon) => polygon.center(),
            Self::Group(group) => group.bounding_rectangle().center(),
        }
    }

    /// Axis-aligned bounding rectangle
    pub fn bounding_rectangle(&self) -> Rectangle {
        match self {
            Self::Circle(circle) => circle.bounding_rectangle(),
            Self::Rectangle(rect) => *rect,
            Self::Polygon(polygon) => polygon.bounding_rectangle(),
            Self::Group(group) => group.bounding_rectangle(),
        }
    }

    /// Whether `point` lies inside the hitbox (any child, for groups)
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Self::Circle(circle) => circle.contains_point(point),
            Self::Rectangle(rect) => rect.contains_point(point),
            Self::Polygon(polygon) => polygon.contains_point(point),
            Self::Group(group) => group.children.iter().any(|child| child.contains_point(point)),
        }
    }

    /// Whether the hitbox's bounding rectangle lies inside `bounds`
    pub fn is_fully_within(&self, bounds: &Rectangle) -> bool {
        bounds.contains_rectangle(&self.bounding_rectangle())
    }

    /// Same hitbox moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Circle(circle) => Self::Circle(circle.translated(offset)),
            Self::Rectangle(rect) => Self::Rectangle(rect.translated(offset)),
            Self::Polygon(polygon) => Self::Polygon(polygon.translated(offset)),
            Self::Group(group) => Self::Group(Group::new_unchecked(
                group.children.iter().map(|child| child.translated(offset)).collect(),
                group.position + offset,
            )),
        }
    }
}

impl AbsDiffEq for GroupChild {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Rectangle(a), Self::Rectangle(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Polygon(a), Self::Polygon(b)) => a.abs_diff_eq(b, epsilon),
            _ => false,
        }
    }
}

impl AbsDiffEq for Group {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl AbsDiffEq for Hitbox {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Rectangle(a), Self::Rectangle(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Polygon(a), Self::Polygon(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Group(a), Self::Group(b)) => a.abs_diff_eq(b, epsilon),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(radius: f32, x: f32, y: f32) -> Circle {
        Circle::new(radius, Vec2::new(x, y)).unwrap()
    }

    #[test]
    fn test_group_rejects_empty() {
        assert_eq!(Group::new(Vec::new()).unwrap_err(), ConstructionError::EmptyGroup);
    }

    #[test]
    fn test_group_rejects_nested_group() {
        let inner = Group::new(vec![GroupChild::Circle(circle(1.0, 0.0, 0.0))]).unwrap();
        let result = Group::from_hitboxes(vec![Hitbox::from(circle(1.0, 5.0, 0.0)), Hitbox::Group(inner)]);

        let error = result.unwrap_err();
        assert!(error.is_unsupported());
        assert!(matches!(
            error,
            HitboxError::UnsupportedOperation { kind: HitboxKind::Group, .. }
        ));
    }

    #[test]
    fn test_group_bounding_rectangle_is_union() {
        let group = Group::new(vec![
            GroupChild::Circle(circle(1.0, 0.0, 0.0)),
            GroupChild::Rectangle(Rectangle::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 8.0)).unwrap()),
        ])
        .unwrap();

        let bounds = group.bounding_rectangle();
        assert_eq!(bounds.min(), Vec2::new(-1.0, -1.0));
        assert_eq!(bounds.max(), Vec2::new(6.0, 8.0));
        assert_eq!(Hitbox::Group(group).center(), Vec2::new(2.5, 3.5));
    }

    #[test]
    fn test_group_equality_ignores_reference_position() {
        let children = vec![GroupChild::Circle(circle(1.0, 0.0, 0.0))];
        let a = Group::new_unchecked(children.clone(), Vec2::zeros());
        let b = Group::new_unchecked(children, Vec2::new(9.0, 9.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains_point_dispatch() {
        let group = Hitbox::Group(
            Group::new(vec![
                GroupChild::Circle(circle(1.0, 0.0, 0.0)),
                GroupChild::Circle(circle(1.0, 10.0, 0.0)),
            ])
            .unwrap(),
        );
        assert!(group.contains_point(Vec2::new(10.5, 0.0)));
        assert!(!group.contains_point(Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_is_fully_within() {
        let bounds = Rectangle::new(Vec2::zeros(), Vec2::new(10.0, 10.0)).unwrap();
        assert!(Hitbox::from(circle(2.0, 5.0, 5.0)).is_fully_within(&bounds));
        assert!(!Hitbox::from(circle(2.0, 9.0, 5.0)).is_fully_within(&bounds));
    }

    #[test]
    fn test_translated_group_moves_children_and_position() {
        let group = Hitbox::Group(Group::new(vec![GroupChild::Circle(circle(1.0, 1.0, 1.0))]).unwrap());
        let Hitbox::Group(moved) = group.translated(Vec2::new(2.0, 0.0)) else {
            panic!("translation changed the hitbox kind");
        };
        assert_eq!(moved.position(), Vec2::new(2.0, 0.0));
        assert_eq!(moved.children()[0], GroupChild::Circle(circle(1.0, 3.0, 1.0)));
    }
}
