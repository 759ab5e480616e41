//! Analytical capsule collision.
//!
//! A cylinder capped by two hemispheres. The core segment runs from
//! `center + axis * height` to `center - axis * height`; points are
//! projected onto it and then tested like a sphere around the projection.

use serde::{Deserialize, Serialize};
use weft_math::{safe_direction, Vec3};
use weft_types::constants::DEFAULT_BOUNCE;

use crate::contact::{ContactHit, ContactQuery};
use crate::sphere::default_bounce;

/// Analytical capsule collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapsuleCollider {
    /// Midpoint of the core segment.
    pub center: Vec3,
    /// Local "up" axis of the capsule. Normalized on use; zero falls back to +Y.
    #[serde(default = "default_axis")]
    pub axis: Vec3,
    /// Distance from the center to each hemisphere center.
    pub height: f32,
    /// Radius of the cylinder and caps.
    pub radius: f32,
    /// Scale of the mirrored incoming motion (0–1).
    #[serde(default = "default_bounce")]
    pub reflect_bounce: f32,
    /// Scale of the push-out along the normal (0–1).
    #[serde(default = "default_bounce")]
    pub normal_bounce: f32,
}

fn default_axis() -> Vec3 {
    Vec3::Y
}

impl CapsuleCollider {
    /// Creates a vertical capsule with default bounce coefficients.
    pub fn new(center: Vec3, height: f32, radius: f32) -> Self {
        Self {
            center,
            axis: Vec3::Y,
            height,
            radius,
            reflect_bounce: DEFAULT_BOUNCE,
            normal_bounce: DEFAULT_BOUNCE,
        }
    }

    /// Orients the capsule along `axis`.
    pub fn with_axis(mut self, axis: Vec3) -> Self {
        self.axis = axis;
        self
    }

    /// Overrides both bounce coefficients.
    pub fn with_bounce(mut self, reflect_bounce: f32, normal_bounce: f32) -> Self {
        self.reflect_bounce = reflect_bounce;
        self.normal_bounce = normal_bounce;
        self
    }

    /// End points of the core segment (top, bottom).
    pub fn segment(&self) -> (Vec3, Vec3) {
        let up = safe_direction(self.axis, Vec3::Y);
        (self.center + up * self.height, self.center - up * self.height)
    }

    /// Closest point to `position` on the core segment.
    ///
    /// Projections before the top end clamp to the top, projections past the
    /// bottom end clamp to the bottom.
    pub fn closest_center(&self, position: Vec3) -> Vec3 {
        let (a, b) = self.segment();
        let ab = b - a;
        let ac = position - a;

        let e = ac.dot(ab);
        if e <= 0.0 {
            return a;
        }
        let f = ab.dot(ab);
        if e >= f {
            return b;
        }
        a + ab * (e / f)
    }
}

impl ContactQuery for CapsuleCollider {
    fn query(&self, position: Vec3, point_radius: f32) -> Option<ContactHit> {
        let closest = self.closest_center(position);
        let combined = self.radius + point_radius;
        let offset = position - closest;
        if offset.length_squared() > combined * combined {
            return None;
        }

        // On the axis itself there is no outward direction; push along +Y.
        let normal = safe_direction(offset, Vec3::Y);
        Some(ContactHit {
            normal,
            contact_point: closest + normal * combined,
            reflect_bounce: self.reflect_bounce,
            normal_bounce: self.normal_bounce,
        })
    }

    fn name(&self) -> &str {
        "capsule"
    }
}
