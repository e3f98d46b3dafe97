//! Hitbox error types

use std::fmt;
use thiserror::Error;

/// The four hitbox kinds, used to name the offending shape in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitboxKind {
    /// Circle
    Circle,
    /// Axis-aligned rectangle
    Rectangle,
    /// Polygon
    Polygon,
    /// Flat group of non-group shapes
    Group,
}

impl fmt::Display for HitboxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Polygon => "polygon",
            Self::Group => "group",
        };
        f.write_str(name)
    }
}

/// Invalid shape parameters, rejected when the shape is built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// Circle radius is zero, negative or not finite
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// Rectangle min corner lies past its max corner on some axis
    #[error("rectangle bounds are inverted: min ({min_x}, {min_y}), max ({max_x}, {max_y})")]
    InvertedBounds {
        /// Min corner x
        min_x: f32,
        /// Min corner y
        min_y: f32,
        /// Max corner x
        max_x: f32,
        /// Max corner y
        max_y: f32,
    },

    /// Polygon has fewer than three points
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// Group has no children
    #[error("group needs at least one child")]
    EmptyGroup,

    /// A coordinate is NaN or infinite
    #[error("{0} has a non-finite coordinate")]
    NonFinite(HitboxKind),

    /// Transform scale is zero, negative or not finite
    #[error("transform scale must be positive and finite, got {0}")]
    InvalidScale(f32),
}

/// Hitbox operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HitboxError {
    /// Shape failed validation
    #[error("invalid hitbox: {0}")]
    Construction(#[from] ConstructionError),

    /// The operation has no implementation for this shape kind
    #[error("{operation} is not supported for {kind} hitboxes")]
    UnsupportedOperation {
        /// Name of the rejected operation
        operation: &'static str,
        /// Kind that cannot perform it
        kind: HitboxKind,
    },

    /// Serialized hitbox could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// Hitbox could not be encoded
    #[error("encode error: {0}")]
    Encode(String),
}

impl HitboxError {
    /// Shorthand for an [`HitboxError::UnsupportedOperation`]
    pub const fn unsupported(operation: &'static str, kind: HitboxKind) -> Self {
        Self::UnsupportedOperation { operation, kind }
    }

    /// Whether this is an unsupported-operation signal rather than a real failure
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}
