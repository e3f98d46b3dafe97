//! Segment intersection
//!
//! Used for bullet and melee hit detection: given a segment from `start` to
//! `end`, find the first point where it meets a hitbox and the outward
//! surface normal there.

use super::error::{HitboxError, HitboxKind};
use super::primitives::{Circle, Rectangle};
use super::shape::{GroupChild, Hitbox};
use crate::foundation::math::{Vec2, Vec2Ext};

const OPERATION: &str = "segment intersection";

/// First contact of a segment with a hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Contact point in world space
    pub point: Vec2,
    /// Outward unit normal of the surface at `point`
    pub normal: Vec2,
}

impl Hitbox {
    /// Intersect the segment `start`-`end` with this hitbox
    ///
    /// Returns the contact nearest to `start`, or `None` when the segment
    /// misses. A segment starting inside the shape reports `start` itself.
    /// For groups the nearest contact over all children wins, earlier
    /// children winning ties.
    ///
    /// # Errors
    ///
    /// [`HitboxError::UnsupportedOperation`] for polygons and for groups that
    /// contain a polygon. Polygon segment tests are not implemented, and an
    /// approximate answer would let projectiles pass through or stop short.
    pub fn intersects_segment(&self, start: Vec2, end: Vec2) -> Result<Option<Intersection>, HitboxError> {
        match self {
            Self::Circle(circle) => Ok(segment_circle(start, end, circle)),
            Self::Rectangle(rect) => Ok(segment_rectangle(start, end, rect)),
            Self::Polygon(_) => Err(HitboxError::unsupported(OPERATION, HitboxKind::Polygon)),
            Self::Group(group) => {
                let mut nearest: Option<(f32, Intersection)> = None;
                for child in group.children() {
                    let hit = match child {
                        GroupChild::Circle(circle) => segment_circle(start, end, circle),
                        GroupChild::Rectangle(rect) => segment_rectangle(start, end, rect),
                        GroupChild::Polygon(_) => {
                            return Err(HitboxError::unsupported(OPERATION, HitboxKind::Polygon));
                        }
                    };
                    if let Some(hit) = hit {
                        let distance = hit.point.distance_squared(start);
                        if nearest.map_or(true, |(best, _)| distance < best) {
                            nearest = Some((distance, hit));
                        }
                    }
                }
                Ok(nearest.map(|(_, hit)| hit))
            }
        }
    }
}

fn segment_circle(start: Vec2, end: Vec2, circle: &Circle) -> Option<Intersection> {
    let center = circle.position();
    let radius = circle.radius();
    let outward = |point: Vec2| (point - center).normalized_or(Vec2::x());

    let direction = end - start;
    let from_center = start - center;

    // Solve |start + t * direction - center|^2 = radius^2 for t in [0, 1]
    let a = direction.dot(&direction);
    let b = 2.0 * from_center.dot(&direction);
    let c = from_center.dot(&from_center) - radius * radius;

    if c <= 0.0 {
        return Some(Intersection {
            point: start,
            normal: outward(start),
        });
    }
    // Zero-length segment that starts outside
    if a == 0.0 {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    // Start is outside, so the smaller root is the entry point
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    let point = start + direction * t;
    Some(Intersection {
        point,
        normal: outward(point),
    })
}

fn segment_rectangle(start: Vec2, end: Vec2, rect: &Rectangle) -> Option<Intersection> {
    if rect.contains_point(start) {
        return Some(Intersection {
            point: start,
            normal: nearest_face_normal(rect, start),
        });
    }

    let direction = end - start;
    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;
    let mut normal = Vec2::zeros();

    // Slab test, one axis at a time
    for axis in 0..2 {
        let origin = start[axis];
        let delta = direction[axis];
        let (low, high) = (rect.min()[axis], rect.max()[axis]);

        if delta == 0.0 {
            if origin < low || origin > high {
                return None;
            }
            continue;
        }

        let mut t_near = (low - origin) / delta;
        let mut t_far = (high - origin) / delta;
        // Entering through the min face points the normal down the axis
        let mut face = -1.0;
        if t_near > t_far {
            std::mem::swap(&mut t_near, &mut t_far);
            face = 1.0;
        }

        if t_near > t_enter {
            t_enter = t_near;
            normal = Vec2::zeros();
            normal[axis] = face;
        }
        t_exit = t_exit.min(t_far);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(Intersection {
        point: start + direction * t_enter,
        normal,
    })
}

fn nearest_face_normal(rect: &Rectangle, point: Vec2) -> Vec2 {
    let faces = [
        (point.x - rect.min().x, Vec2::new(-1.0, 0.0)),
        (rect.max().x - point.x, Vec2::new(1.0, 0.0)),
        (point.y - rect.min().y, Vec2::new(0.0, -1.0)),
        (rect.max().y - point.y, Vec2::new(0.0, 1.0)),
    ];
    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }
    best.1
}
