//! # weft-contact
//!
//! Discrete collision queries between cloth points and analytic shapes.
//!
//! Every shape answers one question through [`ContactQuery`]: given a point
//! and its radius, is it touching, and if so where should it be pushed and
//! how should it bounce. The cloth solver never looks at shape geometry.
//!
//! The shape set is closed ([`Collider`] is an enum over sphere and capsule).

pub mod capsule;
pub mod collider;
pub mod contact;
pub mod sphere;

pub use capsule::CapsuleCollider;
pub use collider::Collider;
pub use contact::{ContactHit, ContactQuery};
pub use sphere::SphereCollider;
