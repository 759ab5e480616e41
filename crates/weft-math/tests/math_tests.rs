//! Integration tests for weft-math.

use approx::assert_relative_eq;
use weft_math::{balanced_frame, reflect, safe_direction, Quat, Vec3};

// ─── Reflection Tests ─────────────────────────────────────────

#[test]
fn reflect_flips_normal_component() {
    let v = Vec3::new(-1.0, -2.0, 0.5);
    let r = reflect(v, Vec3::X);
    assert_eq!(r, Vec3::new(1.0, -2.0, 0.5));
}

#[test]
fn reflect_preserves_length() {
    let v = Vec3::new(0.3, -0.7, 1.1);
    let n = Vec3::new(1.0, 1.0, 0.0).normalize();
    assert_relative_eq!(reflect(v, n).length(), v.length(), epsilon = 1e-6);
}

#[test]
fn safe_direction_falls_back_on_zero() {
    assert_eq!(safe_direction(Vec3::ZERO, Vec3::Y), Vec3::Y);
    assert_eq!(safe_direction(Vec3::new(0.0, 0.0, 3.0), Vec3::Y), Vec3::Z);
}

// ─── Frame Tests ──────────────────────────────────────────────

#[test]
fn perpendicular_frame_maps_axes() {
    let q = balanced_frame(Vec3::X, Vec3::Y);
    // Local Y is forward, local Z is upward, local X is their normal.
    assert_relative_eq!((q * Vec3::Y).distance(Vec3::X), 0.0, epsilon = 1e-5);
    assert_relative_eq!((q * Vec3::Z).distance(Vec3::Y), 0.0, epsilon = 1e-5);
    assert_relative_eq!((q * Vec3::X).distance(Vec3::Z), 0.0, epsilon = 1e-5);
}

#[test]
fn sheared_directions_are_split_evenly() {
    let skew = 100.0_f32.to_radians();
    let upward = Vec3::new(skew.cos(), skew.sin(), 0.0);
    let q = balanced_frame(Vec3::X, upward);

    let forward = q * Vec3::Y;
    let up = q * Vec3::Z;
    assert_relative_eq!(forward.dot(up), 0.0, epsilon = 1e-5);

    // Each direction absorbs five of the ten degrees of shear.
    assert_relative_eq!(forward.angle_between(Vec3::X), 5.0_f32.to_radians(), epsilon = 1e-4);
    assert_relative_eq!(up.angle_between(upward), 5.0_f32.to_radians(), epsilon = 1e-4);
}

#[test]
fn parallel_directions_yield_identity() {
    assert_eq!(balanced_frame(Vec3::Y, Vec3::Y), Quat::IDENTITY);
    assert_eq!(balanced_frame(Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
}
