//! Nearest-approach distance queries

use super::shape::Hitbox;
use super::solid::Reduced;

/// Result of a distance query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRecord {
    /// Gap between the two shapes, never negative
    pub distance: f32,
}

impl Hitbox {
    /// Nearest-approach distance to `other`
    ///
    /// Zero for overlapping circle/rectangle pairs. Polygons are measured by
    /// their bounding rectangle, so the result can be zero for a polygon that
    /// does not actually touch `other`. Groups report the minimum over their
    /// children.
    pub fn distance_to(&self, other: &Self) -> CollisionRecord {
        CollisionRecord {
            distance: reduced_distance(self.reduce(), other.reduce()),
        }
    }
}

fn reduced_distance(a: Reduced<'_>, b: Reduced<'_>) -> f32 {
    a.solids()
        .flat_map(|first| b.solids().map(move |second| first.distance(&second)))
        .fold(f32::INFINITY, f32::min)
}
