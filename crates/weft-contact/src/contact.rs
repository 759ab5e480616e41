//! Contact hit data and the query trait shared by all shapes.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;

/// A detected contact between a cloth point and a collider.
///
/// Carries everything the point needs to reflect its motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactHit {
    /// Outward surface normal at the contact (unit vector, points away from the shape).
    pub normal: Vec3,

    /// Where the point's centre should be placed: on the shape surface,
    /// inflated by the point radius.
    pub contact_point: Vec3,

    /// Scale of the reflected (mirrored) part of the incoming motion.
    pub reflect_bounce: f32,

    /// Scale of the push-out along the normal.
    pub normal_bounce: f32,
}

/// Trait for shapes cloth points can collide with.
///
/// # Implementations
/// - [`SphereCollider`](crate::sphere::SphereCollider)
/// - [`CapsuleCollider`](crate::capsule::CapsuleCollider)
/// - [`Collider`](crate::collider::Collider) — dispatch over both
pub trait ContactQuery {
    /// Tests a point of radius `point_radius` against the shape.
    ///
    /// Returns `None` when there is no contact.
    fn query(&self, position: Vec3, point_radius: f32) -> Option<ContactHit>;

    /// Returns the shape name.
    fn name(&self) -> &str;
}
