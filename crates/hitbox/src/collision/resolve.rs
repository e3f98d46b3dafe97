//! Penetration resolution
//!
//! Produces the displacement that pushes one hitbox out of another. Nothing
//! here mutates its inputs; callers apply the returned vector themselves or
//! use [`Hitbox::resolve_collision`] to get a moved copy.

use super::shape::Hitbox;
use super::solid::{Penetration, Reduced};
use crate::foundation::math::{constants::EPSILON, Vec2};

impl Hitbox {
    /// Minimum translation moving `self` out of `other`, if they overlap
    ///
    /// Groups average the push from every overlapping child rather than
    /// solving the contacts together; see [`Hitbox::adjustment`].
    pub fn penetration(&self, other: &Self) -> Option<Penetration> {
        let vector = reduced_adjustment(self.reduce(), other.reduce())?;
        let depth = vector.norm();
        if depth <= EPSILON {
            return None;
        }
        Some(Penetration {
            direction: vector / depth,
            depth,
        })
    }

    /// Displacement to apply to `self` to separate it from `other`
    ///
    /// `factor` in `[0, 1]` scales the full separation, e.g. `0.5` to relax
    /// overlapping contacts over several ticks. Returns the zero vector when
    /// the shapes do not overlap.
    ///
    /// Circle and rectangle pairs use the exact minimum translation vector
    /// plus a margin of a few ulps, so the moved shape no longer overlaps;
    /// polygons use their bounding rectangle. For a group the result is the
    /// plain average of the non-zero pushes from each overlapping child, not
    /// the deepest one and not weighted by depth or area.
    pub fn adjustment(&self, other: &Self, factor: f32) -> Vec2 {
        let factor = clamp_factor(factor);
        reduced_adjustment(self.reduce(), other.reduce()).map_or_else(Vec2::zeros, |vector| vector * factor)
    }

    /// Copy of `self` moved fully out of `other`
    #[must_use]
    pub fn resolve_collision(&self, other: &Self) -> Self {
        self.translated(self.adjustment(other, 1.0))
    }
}

fn clamp_factor(factor: f32) -> f32 {
    if (0.0..=1.0).contains(&factor) {
        return factor;
    }
    log::warn!("Adjustment factor {} outside [0, 1], clamping", factor);
    if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    }
}

fn reduced_adjustment(a: Reduced<'_>, b: Reduced<'_>) -> Option<Vec2> {
    match (a, b) {
        (Reduced::Solid(first), Reduced::Solid(second)) => first.penetration(&second).map(|p| p.vector()),
        (Reduced::Group(group), _) => average_nonzero(
            group
                .children()
                .iter()
                .filter_map(|child| reduced_adjustment(Reduced::Solid(child.solid()), b)),
        ),
        (Reduced::Solid(_), Reduced::Group(group)) => average_nonzero(
            group
                .children()
                .iter()
                .filter_map(|child| reduced_adjustment(a, Reduced::Solid(child.solid()))),
        ),
    }
}

fn average_nonzero(vectors: impl Iterator<Item = Vec2>) -> Option<Vec2> {
    let (sum, count) = vectors
        .filter(|vector| *vector != Vec2::zeros())
        .fold((Vec2::zeros(), 0_u32), |(sum, count), vector| (sum + vector, count + 1));
    (count > 0).then(|| sum / count as f32)
}
