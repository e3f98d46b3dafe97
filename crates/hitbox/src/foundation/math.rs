//! Math utilities and types
//!
//! Provides the 2D vector type used by every hitbox, plus the handful of
//! operations (rotate, clamp, distance) the collision code leans on.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type (positions, directions and offsets alike)
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Lengths below this are treated as zero when normalizing or dividing
    pub const EPSILON: f32 = 1e-6;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Extension trait for Vec2 with the value operations hitboxes need
pub trait Vec2Ext {
    /// Rotate counter-clockwise around the origin
    fn rotated(&self, radians: f32) -> Vec2;

    /// Clamp each component into `[min, max]`
    fn clamped(&self, min: Vec2, max: Vec2) -> Vec2;

    /// Euclidean distance to another point
    fn distance(&self, other: Vec2) -> f32;

    /// Squared euclidean distance to another point
    fn distance_squared(&self, other: Vec2) -> f32;

    /// Unit vector in the same direction, or `fallback` for a (near) zero vector
    fn normalized_or(&self, fallback: Vec2) -> Vec2;

    /// Both components are finite
    fn is_finite(&self) -> bool;
}

impl Vec2Ext for Vec2 {
    fn rotated(&self, radians: f32) -> Vec2 {
        Rotation2::new(radians) * *self
    }

    fn clamped(&self, min: Vec2, max: Vec2) -> Vec2 {
        // f32::clamp panics on NaN bounds
        Vec2::new(self.x.max(min.x).min(max.x), self.y.max(min.y).min(max.y))
    }

    fn distance(&self, other: Vec2) -> f32 {
        (*self - other).norm()
    }

    fn distance_squared(&self, other: Vec2) -> f32 {
        (*self - other).norm_squared()
    }

    fn normalized_or(&self, fallback: Vec2) -> Vec2 {
        let length = self.norm();
        if length > constants::EPSILON {
            *self / length
        } else {
            fallback
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
