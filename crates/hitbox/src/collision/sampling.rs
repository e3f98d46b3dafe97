//! Uniform random points inside hitboxes
//!
//! Used for spawn positions and particle emitters. The caller owns the
//! random number generator, so results are reproducible with a seeded one.

use rand::distributions::Open01;
use rand::Rng;

use super::primitives::{Circle, Polygon, Rectangle};
use super::shape::{GroupChild, Hitbox};
use crate::config::GeometryConfig;
use crate::foundation::math::{constants::TAU, Vec2};

impl Hitbox {
    /// Random point inside the hitbox, using default sampling limits
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        self.random_point_with(rng, &GeometryConfig::default())
    }

    /// Random point inside the hitbox
    ///
    /// Circles and rectangles are sampled uniformly by area. Polygons use
    /// rejection sampling inside their bounding rectangle, giving up after
    /// `config.max_sample_attempts` and returning the polygon center hint,
    /// which is only inside if the caller kept it consistent.
    /// Groups pick a child uniformly, not weighted by area.
    pub fn random_point_with<R: Rng + ?Sized>(&self, rng: &mut R, config: &GeometryConfig) -> Vec2 {
        match self {
            Self::Circle(circle) => sample_circle(rng, circle),
            Self::Rectangle(rect) => sample_rectangle(rng, rect),
            Self::Polygon(polygon) => sample_polygon(rng, polygon, config),
            Self::Group(group) => {
                let children = group.children();
                match &children[rng.gen_range(0..children.len())] {
                    GroupChild::Circle(circle) => sample_circle(rng, circle),
                    GroupChild::Rectangle(rect) => sample_rectangle(rng, rect),
                    GroupChild::Polygon(polygon) => sample_polygon(rng, polygon, config),
                }
            }
        }
    }
}

fn sample_circle<R: Rng + ?Sized>(rng: &mut R, circle: &Circle) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    // sqrt keeps the density uniform over the area
    let distance = circle.radius() * rng.gen::<f32>().sqrt();
    circle.position() + Vec2::new(angle.cos(), angle.sin()) * distance
}

fn sample_rectangle<R: Rng + ?Sized>(rng: &mut R, rect: &Rectangle) -> Vec2 {
    let min = rect.min();
    let (u, v): (f32, f32) = (rng.sample(Open01), rng.sample(Open01));
    Vec2::new(min.x + u * rect.width(), min.y + v * rect.height())
}

fn sample_polygon<R: Rng + ?Sized>(rng: &mut R, polygon: &Polygon, config: &GeometryConfig) -> Vec2 {
    let bounds = polygon.bounding_rectangle();
    for attempt in 1..=config.max_sample_attempts {
        let candidate = sample_rectangle(rng, &bounds);
        if polygon.contains_point(candidate) {
            if attempt > config.sample_warn_threshold {
                log::debug!("Polygon sample took {} attempts", attempt);
            }
            return candidate;
        }
    }
    let center = polygon.center();
    if polygon.contains_point(center) {
        log::warn!(
            "No polygon sample after {} attempts, using center {:?}",
            config.max_sample_attempts,
            center
        );
    } else {
        log::warn!(
            "No polygon sample after {} attempts, using center {:?} which lies outside the polygon",
            config.max_sample_attempts,
            center
        );
    }
    center
}
