//! 2D hitbox geometry and collision queries
//!
//! Provides the hitbox shapes used by game entities and map objects, and the
//! pairwise queries run on them every tick.
//!
//! # Architecture
//!
//! - **Closed shape set**: [`Hitbox`] is an enum of circle, rectangle,
//!   polygon and group. Every query is an exhaustive match, so adding a kind
//!   means handling it everywhere.
//! - **Flat groups**: a [`Group`] holds [`GroupChild`] values, which have no
//!   group variant. Nesting is ruled out by the types.
//! - **Model space storage**: templates are kept in local coordinates and
//!   placed with [`Hitbox::transform`] or [`Hitbox::transform_rotate`] when
//!   they are tested.
//! - **Polygon approximation**: pair queries treat a polygon as its bounding
//!   rectangle, on either side of the query.
//!
//! # Module Organization
//!
//! - [`primitives`] - Circle, rectangle and polygon value types
//! - [`shape`] - The [`Hitbox`] sum type and flat groups
//! - [`transform`] - Model-space to world-space placement
//! - [`raycast`] - Segment intersection
//! - [`distance`] - Separation distance
//! - [`codec`] - Serialized records and RON text encoding
//! - [`sampling`] - Random points inside a hitbox
//!
//! Overlap tests, penetration resolution and the shared pair math live in
//! private modules and surface as methods on [`Hitbox`].

pub mod codec;
pub mod distance;
pub mod error;
pub mod primitives;
pub mod raycast;
pub mod sampling;
pub mod shape;
pub mod transform;

mod overlap;
mod resolve;
mod solid;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use codec::{decode, encode, HitboxDef};
pub use distance::CollisionRecord;
pub use error::{ConstructionError, HitboxError, HitboxKind};
pub use primitives::{Circle, Polygon, Rectangle};
pub use raycast::Intersection;
pub use shape::{Group, GroupChild, Hitbox};
pub use solid::Penetration;
pub use transform::Orientation;
