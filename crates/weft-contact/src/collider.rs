//! Closed set of collider shapes.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;

use crate::capsule::CapsuleCollider;
use crate::contact::{ContactHit, ContactQuery};
use crate::sphere::SphereCollider;

/// Any collider the cloth can be resolved against.
///
/// Serialized with a `shape` tag so scene files read as
/// `{ shape = "sphere", center = [0, 0, 0], radius = 1.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Collider {
    Sphere(SphereCollider),
    Capsule(CapsuleCollider),
}

impl Collider {
    /// Shorthand for a sphere collider with default bounce.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere(SphereCollider::new(center, radius))
    }

    /// Shorthand for a vertical capsule collider with default bounce.
    pub fn capsule(center: Vec3, height: f32, radius: f32) -> Self {
        Self::Capsule(CapsuleCollider::new(center, height, radius))
    }

    /// Returns `(reflect_bounce, normal_bounce)`.
    pub fn bounce(&self) -> (f32, f32) {
        match self {
            Self::Sphere(s) => (s.reflect_bounce, s.normal_bounce),
            Self::Capsule(c) => (c.reflect_bounce, c.normal_bounce),
        }
    }

    /// Returns the collider radius.
    pub fn radius(&self) -> f32 {
        match self {
            Self::Sphere(s) => s.radius,
            Self::Capsule(c) => c.radius,
        }
    }
}

impl ContactQuery for Collider {
    fn query(&self, position: Vec3, point_radius: f32) -> Option<ContactHit> {
        match self {
            Self::Sphere(s) => s.query(position, point_radius),
            Self::Capsule(c) => c.query(position, point_radius),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Sphere(s) => s.name(),
            Self::Capsule(c) => c.name(),
        }
    }
}

impl From<SphereCollider> for Collider {
    fn from(sphere: SphereCollider) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<CapsuleCollider> for Collider {
    fn from(capsule: CapsuleCollider) -> Self {
        Self::Capsule(capsule)
    }
}
