//! Analytical sphere collision.
//!
//! Points closer to the centre than `radius + point_radius` are pushed
//! back onto the inflated surface along the outward normal.

use serde::{Deserialize, Serialize};
use weft_math::{safe_direction, Vec3};
use weft_types::constants::DEFAULT_BOUNCE;

use crate::contact::{ContactHit, ContactQuery};

/// Analytical sphere collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
    /// Scale of the mirrored incoming motion (0–1).
    #[serde(default = "default_bounce")]
    pub reflect_bounce: f32,
    /// Scale of the push-out along the normal (0–1).
    #[serde(default = "default_bounce")]
    pub normal_bounce: f32,
}

pub(crate) fn default_bounce() -> f32 {
    DEFAULT_BOUNCE
}

impl SphereCollider {
    /// Creates a new sphere collider with default bounce coefficients.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            reflect_bounce: DEFAULT_BOUNCE,
            normal_bounce: DEFAULT_BOUNCE,
        }
    }

    /// Overrides both bounce coefficients.
    pub fn with_bounce(mut self, reflect_bounce: f32, normal_bounce: f32) -> Self {
        self.reflect_bounce = reflect_bounce;
        self.normal_bounce = normal_bounce;
        self
    }
}

impl ContactQuery for SphereCollider {
    fn query(&self, position: Vec3, point_radius: f32) -> Option<ContactHit> {
        let combined = self.radius + point_radius;
        let offset = position - self.center;
        if offset.length() >= combined {
            return None;
        }

        // Exactly at center, push up
        let normal = safe_direction(offset, Vec3::Y);
        Some(ContactHit {
            normal,
            contact_point: self.center + normal * combined,
            reflect_bounce: self.reflect_bounce,
            normal_bounce: self.normal_bounce,
        })
    }

    fn name(&self) -> &str {
        "sphere"
    }
}
