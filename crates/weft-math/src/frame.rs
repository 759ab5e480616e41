//! Orientation frames for point proxies.
//!
//! A cloth point knows two directions: along its row neighbours and along
//! its column neighbours. On a sheared cloth these are not perpendicular,
//! so both are rotated toward (or away from) each other by half of the
//! deviation from 90° before the rotation is assembled.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Quat, Vec3};

/// Builds a rotation whose local axes are `(forward × upward, forward, upward)`
/// after splitting the angular deviation from perpendicular equally between
/// `forward` and `upward`.
///
/// Returns identity when the two directions are parallel or degenerate.
pub fn balanced_frame(forward: Vec3, upward: Vec3) -> Quat {
    let (Some(forward), Some(upward)) = (forward.try_normalize(), upward.try_normalize()) else {
        return Quat::IDENTITY;
    };
    let Some(normal) = forward.cross(upward).try_normalize() else {
        return Quat::IDENTITY;
    };

    let half_deviation = 0.5 * (forward.angle_between(upward) - FRAC_PI_2);
    let forward = Quat::from_axis_angle(normal, half_deviation) * forward;
    let upward = Quat::from_axis_angle(normal, -half_deviation) * upward;

    let basis = Mat3::from_cols(normal, forward.normalize(), upward.normalize());
    Quat::from_mat3(&basis).normalize()
}
