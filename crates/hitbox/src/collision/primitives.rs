//! Primitive hitbox shapes
//!
//! Circles, axis-aligned rectangles and polygons. Each one validates its
//! parameters on construction and is immutable afterwards: every "modifying"
//! operation returns a new value.

use approx::AbsDiffEq;

use super::error::{ConstructionError, HitboxKind};
use crate::foundation::math::{Vec2, Vec2Ext};

/// A circle given by its center position and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    position: Vec2,
    radius: f32,
}

impl Circle {
    /// Creates a circle, rejecting a non-positive radius
    pub fn new(radius: f32, position: Vec2) -> Result<Self, ConstructionError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConstructionError::InvalidRadius(radius));
        }
        if !position.is_finite() {
            return Err(ConstructionError::NonFinite(HitboxKind::Circle));
        }
        Ok(Self { position, radius })
    }

    /// Builds a circle from values already known to be valid
    pub(crate) const fn new_unchecked(radius: f32, position: Vec2) -> Self {
        Self { position, radius }
    }

    /// Center of the circle
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Radius of the circle
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether `point` lies inside or on the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.distance_squared(self.position) <= self.radius * self.radius
    }

    /// Smallest axis-aligned rectangle enclosing the circle
    pub fn bounding_rectangle(&self) -> Rectangle {
        let extent = Vec2::new(self.radius, self.radius);
        Rectangle::new_unchecked(self.position - extent, self.position + extent)
    }

    /// Same circle moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new_unchecked(self.radius, self.position + offset)
    }
}

/// An axis-aligned rectangle (AABB) given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    min: Vec2,
    max: Vec2,
}

impl Rectangle {
    /// Creates a rectangle, rejecting inverted bounds
    ///
    /// Zero-width or zero-height rectangles are allowed.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self, ConstructionError> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(ConstructionError::NonFinite(HitboxKind::Rectangle));
        }
        if min.x > max.x || min.y > max.y {
            return Err(ConstructionError::InvertedBounds {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Creates a rectangle of the given size centered on `center`
    pub fn from_rect(width: f32, height: f32, center: Vec2) -> Result<Self, ConstructionError> {
        let half = Vec2::new(width, height) * 0.5;
        Self::new(center - half, center + half)
    }

    /// Creates the bounding rectangle of the segment `a`-`b`
    pub fn from_line(a: Vec2, b: Vec2) -> Result<Self, ConstructionError> {
        Self::new(
            Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Builds a rectangle from corners already known to be ordered
    pub(crate) const fn new_unchecked(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding rectangle of a non-empty set of points
    pub(crate) fn enclosing(points: &[Vec2]) -> Self {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for point in points {
            min = Vec2::new(min.x.min(point.x), min.y.min(point.y));
            max = Vec2::new(max.x.max(point.x), max.y.max(point.y));
        }
        Self::new_unchecked(min, max)
    }

    /// Lower-left corner
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Extent along x
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along y
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half of the width and height
    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Corners in counter-clockwise order starting at `min`
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Whether `point` lies inside or on the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains_rectangle(&self, other: &Self) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Smallest rectangle enclosing both
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new_unchecked(
            Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// Same rectangle moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new_unchecked(self.min + offset, self.max + offset)
    }
}

/// A simple polygon
///
/// `center` is a caller-supplied centroid hint. It is never recomputed from
/// the points, so callers must keep the two consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
    center: Vec2,
}

impl Polygon {
    /// Creates a polygon from at least three points and a center hint
    pub fn new(points: Vec<Vec2>, center: Vec2) -> Result<Self, ConstructionError> {
        if points.len() < 3 {
            return Err(ConstructionError::TooFewPoints(points.len()));
        }
        if !center.is_finite() || points.iter().any(|p| !p.is_finite()) {
            return Err(ConstructionError::NonFinite(HitboxKind::Polygon));
        }
        Ok(Self { points, center })
    }

    /// Creates a polygon whose center hint is the mean of its points
    pub fn from_points(points: Vec<Vec2>) -> Result<Self, ConstructionError> {
        let center = vertex_mean(&points);
        Self::new(points, center)
    }

    /// Builds a polygon from values already known to be valid
    pub(crate) fn new_unchecked(points: Vec<Vec2>, center: Vec2) -> Self {
        Self { points, center }
    }

    /// Vertices in order
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Center hint
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Axis-aligned bounding rectangle of the vertices
    pub fn bounding_rectangle(&self) -> Rectangle {
        Rectangle::enclosing(&self.points)
    }

    /// Even-odd point-in-polygon test
    pub fn contains_point(&self, point: Vec2) -> bool {
        let mut inside = false;
        let mut j = self.points.len() - 1;
        for (i, pi) in self.points.iter().enumerate() {
            let pj = self.points[j];
            if (pi.y > point.y) != (pj.y > point.y)
                && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Same polygon moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new_unchecked(
            self.points.iter().map(|p| p + offset).collect(),
            self.center + offset,
        )
    }
}

fn vertex_mean(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::zeros();
    }
    let sum = points.iter().fold(Vec2::zeros(), |acc, p| acc + p);
    sum / points.len() as f32
}

impl AbsDiffEq for Circle {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

impl AbsDiffEq for Rectangle {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.min.abs_diff_eq(&other.min, epsilon) && self.max.abs_diff_eq(&other.max, epsilon)
    }
}

impl AbsDiffEq for Polygon {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            && self.center.abs_diff_eq(&other.center, epsilon)
    }
}
