//! # Hitbox
//!
//! 2D hitbox geometry and collision queries for a top-down game.
//!
//! ## Features
//!
//! - **Four shape kinds**: circles, axis-aligned rectangles, polygons and flat groups
//! - **Pair queries**: overlap, nearest distance and penetration resolution
//! - **Placement**: quarter-turn and free rotation from model space to world space
//! - **Segment tests**: first contact point and surface normal for projectiles
//! - **Serialization**: serde records with a RON text form
//! - **Sampling**: uniform random points for spawns and effects
//!
//! ## Quick Start
//!
//! ```rust
//! use hitbox::prelude::*;
//!
//! fn main() -> Result<(), HitboxError> {
//!     let player = Hitbox::from(Circle::new(5.0, Vec2::new(0.0, 0.0))?);
//!     let wall = Hitbox::from(Rectangle::new(Vec2::new(3.0, -10.0), Vec2::new(6.0, 10.0))?);
//!
//!     if player.collides_with(&wall) {
//!         let player = player.resolve_collision(&wall);
//!         assert!(!player.collides_with(&wall));
//!     }
//!
//!     let text = encode(&wall)?;
//!     assert_eq!(decode(&text)?, wall);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod collision;
pub mod config;
pub mod foundation;

/// Common imports for hitbox users
pub mod prelude {
    pub use crate::{
        collision::{
            decode, encode, Circle, CollisionRecord, ConstructionError, Group, GroupChild, Hitbox, HitboxError,
            HitboxKind, Intersection, Orientation, Penetration, Polygon, Rectangle,
        },
        config::{Config, GeometryConfig},
        foundation::math::{Vec2, Vec2Ext},
    };
}
