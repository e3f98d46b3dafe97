//! Pairwise narrow-phase math on reduced shapes
//!
//! Every pair query first reduces its operands to a [`Solid`] (circle or
//! rectangle) or a group of solids. Polygons are reduced to their bounding
//! rectangle here, in one place, so the approximation is applied the same
//! way whichever side of the query the polygon sits on.

use super::primitives::{Circle, Rectangle};
use super::shape::{Group, GroupChild, Hitbox};
use crate::foundation::math::{Vec2, Vec2Ext};

/// Separation margin in units of `f32::EPSILON` relative to coordinate magnitude
const SEPARATION_ULPS: f32 = 32.0;

/// A shape the exact pair formulas understand
#[derive(Debug, Clone, Copy)]
pub(crate) enum Solid {
    Circle(Circle),
    Rectangle(Rectangle),
}

/// A hitbox reduced for pairwise queries
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reduced<'a> {
    Solid(Solid),
    Group(&'a Group),
}

impl GroupChild {
    pub(crate) fn solid(&self) -> Solid {
        match self {
            Self::Circle(circle) => Solid::Circle(*circle),
            Self::Rectangle(rect) => Solid::Rectangle(*rect),
            Self::Polygon(polygon) => Solid::Rectangle(polygon.bounding_rectangle()),
        }
    }
}

impl Hitbox {
    pub(crate) fn reduce(&self) -> Reduced<'_> {
        match self {
            Self::Circle(circle) => Reduced::Solid(Solid::Circle(*circle)),
            Self::Rectangle(rect) => Reduced::Solid(Solid::Rectangle(*rect)),
            Self::Polygon(polygon) => Reduced::Solid(Solid::Rectangle(polygon.bounding_rectangle())),
            Self::Group(group) => Reduced::Group(group),
        }
    }
}

impl<'a> Reduced<'a> {
    /// Children of a group as solids, or the solid itself
    pub(crate) fn solids(self) -> impl Iterator<Item = Solid> + 'a {
        let (single, children) = match self {
            Self::Solid(solid) => (Some(solid), None),
            Self::Group(group) => (None, Some(group.children().iter().map(GroupChild::solid))),
        };
        single.into_iter().chain(children.into_iter().flatten())
    }
}

/// Minimum translation that separates two overlapping shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit direction to move the first shape along
    pub direction: Vec2,
    /// Overlap distance along `direction`
    pub depth: f32,
}

impl Penetration {
    /// `direction * depth`
    pub fn vector(&self) -> Vec2 {
        self.direction * self.depth
    }
}

impl Solid {
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => circles_overlap(a, b),
            (Self::Circle(circle), Self::Rectangle(rect)) | (Self::Rectangle(rect), Self::Circle(circle)) => {
                circle_rectangle_overlap(circle, rect)
            }
            (Self::Rectangle(a), Self::Rectangle(b)) => rectangles_overlap(a, b),
        }
    }

    pub(crate) fn distance(&self, other: &Self) -> f32 {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => {
                (a.position().distance(b.position()) - a.radius() - b.radius()).max(0.0)
            }
            (Self::Circle(circle), Self::Rectangle(rect)) | (Self::Rectangle(rect), Self::Circle(circle)) => {
                let closest = circle.position().clamped(rect.min(), rect.max());
                (closest.distance(circle.position()) - circle.radius()).max(0.0)
            }
            (Self::Rectangle(a), Self::Rectangle(b)) => {
                let dx = (a.min().x - b.max().x).max(b.min().x - a.max().x).max(0.0);
                let dy = (a.min().y - b.max().y).max(b.min().y - a.max().y).max(0.0);
                dx.hypot(dy)
            }
        }
    }

    /// How to move `self` out of `other`, if they overlap
    ///
    /// The depth includes [`Solid::separation_margin`], so translating `self`
    /// by the result clears the strict overlap test after rounding.
    pub(crate) fn penetration(&self, other: &Self) -> Option<Penetration> {
        let contact = match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => circle_circle_penetration(a, b),
            (Self::Circle(circle), Self::Rectangle(rect)) => circle_rectangle_penetration(circle, rect),
            (Self::Rectangle(rect), Self::Circle(circle)) => {
                circle_rectangle_penetration(circle, rect).map(|p| Penetration {
                    direction: -p.direction,
                    depth: p.depth,
                })
            }
            (Self::Rectangle(a), Self::Rectangle(b)) => rectangle_rectangle_penetration(a, b),
        };
        let margin = self.separation_margin(other);
        contact.map(|p| Penetration {
            direction: p.direction,
            depth: p.depth + margin,
        })
    }

    /// Extra push past the exact contact, a few ulps at the scale of the coordinates involved
    fn separation_margin(&self, other: &Self) -> f32 {
        SEPARATION_ULPS * f32::EPSILON * (1.0 + self.magnitude().max(other.magnitude()))
    }

    /// Largest absolute coordinate the shape reaches
    fn magnitude(&self) -> f32 {
        match self {
            Self::Circle(circle) => circle.position().amax() + circle.radius(),
            Self::Rectangle(rect) => rect.min().amax().max(rect.max().amax()),
        }
    }
}

fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let radius_sum = a.radius() + b.radius();
    a.position().distance_squared(b.position()) < radius_sum * radius_sum
}

fn circle_rectangle_overlap(circle: &Circle, rect: &Rectangle) -> bool {
    let closest = circle.position().clamped(rect.min(), rect.max());
    closest.distance_squared(circle.position()) < circle.radius() * circle.radius()
}

fn rectangles_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.min().x < b.max().x && b.min().x < a.max().x && a.min().y < b.max().y && b.min().y < a.max().y
}

fn circle_circle_penetration(a: &Circle, b: &Circle) -> Option<Penetration> {
    if !circles_overlap(a, b) {
        return None;
    }
    let offset = a.position() - b.position();
    // Concentric circles have no preferred direction; push along +x.
    let direction = offset.normalized_or(Vec2::x());
    Some(Penetration {
        direction,
        depth: a.radius() + b.radius() - offset.norm(),
    })
}

fn circle_rectangle_penetration(circle: &Circle, rect: &Rectangle) -> Option<Penetration> {
    let position = circle.position();
    let radius = circle.radius();

    if rect.contains_point(position) {
        // Center is inside: leave through the nearest face.
        let local = position - rect.center();
        let half = rect.half_extents();
        let depth_x = half.x + radius - local.x.abs();
        let depth_y = half.y + radius - local.y.abs();
        let penetration = if depth_x <= depth_y {
            Penetration {
                direction: Vec2::new(sign(local.x), 0.0),
                depth: depth_x,
            }
        } else {
            Penetration {
                direction: Vec2::new(0.0, sign(local.y)),
                depth: depth_y,
            }
        };
        return Some(penetration);
    }

    let closest = position.clamped(rect.min(), rect.max());
    let offset = position - closest;
    let distance_squared = offset.norm_squared();
    if distance_squared >= radius * radius {
        return None;
    }
    let distance = distance_squared.sqrt();
    Some(Penetration {
        direction: offset / distance,
        depth: radius - distance,
    })
}

fn rectangle_rectangle_penetration(a: &Rectangle, b: &Rectangle) -> Option<Penetration> {
    if !rectangles_overlap(a, b) {
        return None;
    }

    // Distance `a` must travel in each direction to clear `b`
    let left = a.max().x - b.min().x;
    let right = b.max().x - a.min().x;
    let down = a.max().y - b.min().y;
    let up = b.max().y - a.min().y;

    let (x_direction, x_depth) = if left <= right { (-1.0, left) } else { (1.0, right) };
    let (y_direction, y_depth) = if down <= up { (-1.0, down) } else { (1.0, up) };

    let penetration = if x_depth <= y_depth {
        Penetration {
            direction: Vec2::new(x_direction, 0.0),
            depth: x_depth,
        }
    } else {
        Penetration {
            direction: Vec2::new(0.0, y_direction),
            depth: y_depth,
        }
    };
    Some(penetration)
}

/// -1.0 for negative values, 1.0 otherwise (zero included)
fn sign(value: f32) -> f32 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}
