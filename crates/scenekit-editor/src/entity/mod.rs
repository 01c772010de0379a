//! Entity model: identities, transforms, primitives, and groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use scenekit_core::Vec3;

mod group;
mod primitive;

pub use group::Group;
pub use primitive::{
    Material, MaterialEdit, ParamKind, ParamValue, Parameter, Primitive, PrimitiveType,
};

/// Stable identity of a primitive or group.
///
/// Ids are allocated by the entity store, unique across both tables, and
/// immutable for the lifetime of the entity. The textual form doubles as a
/// DSL identifier in exported scenes, so it stays identifier-shaped
/// (`P1`, `G3`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Translation, Euler rotation, and scale of an entity.
///
/// Rotation angles are stored in radians; conversion to and from degrees
/// happens only at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Capability shared by primitives and groups: a stable identity, an
/// editable display name, and a full transform.
///
/// Implementors delegate to an embedded [`Transform`] value; there is no
/// shared mutable state between entity kinds.
pub trait Transformable {
    fn id(&self) -> &EntityId;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);
    fn transform(&self) -> Transform;
    fn transform_mut(&mut self) -> &mut Transform;

    fn translation(&self) -> Vec3 {
        self.transform().translation
    }

    fn set_translation(&mut self, translation: Vec3) {
        self.transform_mut().translation = translation;
    }

    /// Euler rotation in radians.
    fn rotation(&self) -> Vec3 {
        self.transform().rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.transform_mut().rotation = rotation;
    }

    /// Euler rotation in degrees, the unit the transform fields display.
    fn rotation_degrees(&self) -> Vec3 {
        self.rotation().map(f64::to_degrees)
    }

    fn set_rotation_degrees(&mut self, rotation: Vec3) {
        self.set_rotation(rotation.map(f64::to_radians));
    }

    fn scale(&self) -> Vec3 {
        self.transform().scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.transform_mut().scale = scale;
    }
}
