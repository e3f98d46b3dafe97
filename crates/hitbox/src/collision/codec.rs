//! Structural serialization of hitboxes
//!
//! Each shape kind maps to a small serde record. Groups carry a list of
//! [`GroupChildDef`], which has no group variant, so nested groups cannot be
//! expressed in serialized form either. Decoding goes back through the
//! validating constructors, so a decoded hitbox satisfies the same
//! invariants as one built in code.
//!
//! The text entry points [`encode`] and [`decode`] use RON, the same format
//! the config files use.

use serde::{Deserialize, Serialize};

use super::error::{ConstructionError, HitboxError};
use super::primitives::{Circle, Polygon, Rectangle};
use super::shape::{Group, GroupChild, Hitbox};
use crate::foundation::math::Vec2;

/// Serialized 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorDef {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

/// Serialized circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleDef {
    /// Radius
    pub radius: f32,
    /// Center
    pub position: VectorDef,
}

/// Serialized rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleDef {
    /// Min corner
    pub min: VectorDef,
    /// Max corner
    pub max: VectorDef,
}

/// Serialized polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDef {
    /// Vertices in order
    pub points: Vec<VectorDef>,
    /// Center hint
    pub center: VectorDef,
}

/// Serialized group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDef {
    /// Children in order
    pub hitboxes: Vec<GroupChildDef>,
}

/// Serialized group child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupChildDef {
    /// Circle
    Circle(CircleDef),
    /// Rectangle
    Rectangle(RectangleDef),
    /// Polygon
    Polygon(PolygonDef),
}

/// Serialized hitbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HitboxDef {
    /// Circle
    Circle(CircleDef),
    /// Rectangle
    Rectangle(RectangleDef),
    /// Polygon
    Polygon(PolygonDef),
    /// Group
    Group(GroupDef),
}

/// Encode a hitbox as RON text
///
/// # Errors
///
/// [`HitboxError::Encode`] if the serializer fails.
pub fn encode(hitbox: &Hitbox) -> Result<String, HitboxError> {
    ron::to_string(&HitboxDef::from(hitbox)).map_err(|e| HitboxError::Encode(e.to_string()))
}

/// Decode a hitbox from RON text
///
/// # Errors
///
/// [`HitboxError::Decode`] for malformed text (including a group nested in
/// a group) and [`HitboxError::Construction`] for well-formed text that
/// describes an invalid shape.
pub fn decode(text: &str) -> Result<Hitbox, HitboxError> {
    let def: HitboxDef = ron::from_str(text).map_err(|e| {
        log::debug!("Failed to decode hitbox: {}", e);
        HitboxError::Decode(e.to_string())
    })?;
    Ok(Hitbox::try_from(def)?)
}

impl From<Vec2> for VectorDef {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<VectorDef> for Vec2 {
    fn from(v: VectorDef) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<&Circle> for CircleDef {
    fn from(circle: &Circle) -> Self {
        Self {
            radius: circle.radius(),
            position: circle.position().into(),
        }
    }
}

impl From<&Rectangle> for RectangleDef {
    fn from(rect: &Rectangle) -> Self {
        Self {
            min: rect.min().into(),
            max: rect.max().into(),
        }
    }
}

impl From<&Polygon> for PolygonDef {
    fn from(polygon: &Polygon) -> Self {
        Self {
            points: polygon.points().iter().map(|p| VectorDef::from(*p)).collect(),
            center: polygon.center().into(),
        }
    }
}

impl From<&GroupChild> for GroupChildDef {
    fn from(child: &GroupChild) -> Self {
        match child {
            GroupChild::Circle(circle) => Self::Circle(circle.into()),
            GroupChild::Rectangle(rect) => Self::Rectangle(rect.into()),
            GroupChild::Polygon(polygon) => Self::Polygon(polygon.into()),
        }
    }
}

impl From<&Hitbox> for HitboxDef {
    fn from(hitbox: &Hitbox) -> Self {
        match hitbox {
            Hitbox::Circle(circle) => Self::Circle(circle.into()),
            Hitbox::Rectangle(rect) => Self::Rectangle(rect.into()),
            Hitbox::Polygon(polygon) => Self::Polygon(polygon.into()),
            Hitbox::Group(group) => Self::Group(GroupDef {
                hitboxes: group.children().iter().map(GroupChildDef::from).collect(),
            }),
        }
    }
}

impl From<Hitbox> for HitboxDef {
    fn from(hitbox: Hitbox) -> Self {
        Self::from(&hitbox)
    }
}

impl TryFrom<CircleDef> for Circle {
    type Error = ConstructionError;

    fn try_from(def: CircleDef) -> Result<Self, Self::Error> {
        Self::new(def.radius, def.position.into())
    }
}

impl TryFrom<RectangleDef> for Rectangle {
    type Error = ConstructionError;

    fn try_from(def: RectangleDef) -> Result<Self, Self::Error> {
        Self::new(def.min.into(), def.max.into())
    }
}

impl TryFrom<PolygonDef> for Polygon {
    type Error = ConstructionError;

    fn try_from(def: PolygonDef) -> Result<Self, Self::Error> {
        Self::new(def.points.into_iter().map(Vec2::from).collect(), def.center.into())
    }
}

impl TryFrom<GroupChildDef> for GroupChild {
    type Error = ConstructionError;

    fn try_from(def: GroupChildDef) -> Result<Self, Self::Error> {
        Ok(match def {
            GroupChildDef::Circle(circle) => Self::Circle(circle.try_into()?),
            GroupChildDef::Rectangle(rect) => Self::Rectangle(rect.try_into()?),
            GroupChildDef::Polygon(polygon) => Self::Polygon(polygon.try_into()?),
        })
    }
}

impl TryFrom<HitboxDef> for Hitbox {
    type Error = ConstructionError;

    fn try_from(def: HitboxDef) -> Result<Self, Self::Error> {
        Ok(match def {
            HitboxDef::Circle(circle) => Self::Circle(circle.try_into()?),
            HitboxDef::Rectangle(rect) => Self::Rectangle(rect.try_into()?),
            HitboxDef::Polygon(polygon) => Self::Polygon(polygon.try_into()?),
            HitboxDef::Group(group) => {
                let children = group
                    .hitboxes
                    .into_iter()
                    .map(GroupChild::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::Group(Group::new(children)?)
            }
        })
    }
}

impl Serialize for Hitbox {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        HitboxDef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hitbox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let def = HitboxDef::deserialize(deserializer)?;
        Self::try_from(def).map_err(serde::de::Error::custom)
    }
}
