//! External force fields.
//!
//! The simulator samples one wind velocity per point per step; how the
//! field is produced (noise grids, interpolation, scripted gusts) is up
//! to the implementor.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;

/// A spatial wind velocity field.
pub trait WindField: Send {
    /// Wind velocity at `position`.
    fn sample(&self, position: Vec3) -> Vec3;
}

impl<F> WindField for F
where
    F: Fn(Vec3) -> Vec3 + Send,
{
    fn sample(&self, position: Vec3) -> Vec3 {
        self(position)
    }
}

/// The same wind everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformWind(pub Vec3);

impl WindField for UniformWind {
    fn sample(&self, _position: Vec3) -> Vec3 {
        self.0
    }
}
