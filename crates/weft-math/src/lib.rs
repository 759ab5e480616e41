//! # weft-math
//!
//! Small vector toolkit for the Weft cloth simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, `Mat3`)
//! - Reflection of a displacement about a contact normal
//! - Balanced orthogonal frames built from two loosely perpendicular directions

pub mod frame;
pub mod vector;

// Re-export glam types as the canonical math types for Weft.
pub use glam::{Mat3, Quat, Vec3};

pub use frame::balanced_frame;
pub use vector::{reflect, safe_direction};
