//! Vector helpers shared by the contact and cloth crates.

use glam::Vec3;

/// Reflects `v` about the plane with unit normal `n`.
///
/// `reflect(v, n) = v - 2 (v · n) n`
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Normalizes `v`, returning `fallback` when `v` has no usable length.
#[inline]
pub fn safe_direction(v: Vec3, fallback: Vec3) -> Vec3 {
    if v.length_squared() <= weft_types::constants::EPSILON * weft_types::constants::EPSILON {
        return fallback;
    }
    v.try_normalize().unwrap_or(fallback)
}
