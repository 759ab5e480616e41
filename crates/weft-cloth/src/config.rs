//! Cloth configuration.
//!
//! Parameters the simulator reads every step: link spacing and tear
//! threshold, solver passes, corner pins, forces and colliders.
//! Values are assumed validated (see `weft-io::validator`).

use serde::{Deserialize, Serialize};
use weft_contact::Collider;
use weft_types::constants::{
    AIR_FRICTION, CONTACT_FRICTION, DEFAULT_SOLVE_ITERATIONS, GRAVITY,
};

/// Configuration for the cloth simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Rest length of row and column links. Diagonals use `spacing × √2`.
    pub spacing: f32,

    /// Break ratio: a link dies once stretched beyond `rest × extensibility`.
    pub extensibility: f32,

    /// Weight of the soft diagonal pass (0 disables it).
    pub consistency: f32,

    /// Full-weight relaxation passes over row and column links per step.
    pub solve_iterations: u32,

    /// Whether torn links may heal once their endpoints come back in range.
    pub can_self_repair: bool,

    /// Which of the four grid corners are pinned.
    pub corners: CornerLocks,

    /// Gravitational acceleration magnitude (applied along -Y).
    pub gravity: f32,

    /// Point mass. Scales both gravity and wind.
    pub mass: f32,

    /// Scale applied to sampled wind velocity.
    pub wind_multiplier: f32,

    /// Velocity retention in free flight and in contact.
    pub friction: FrictionConfig,

    /// Colliders, queried in order. The first hit wins.
    pub colliders: Vec<Collider>,
}

/// Pin flags for the grid corners.
///
/// A = (0, 0), B = (last row, 0), C = (0, last column), D = (last row, last column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerLocks {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    pub d: bool,
}

/// Per-step velocity retention factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrictionConfig {
    /// Used when the point hit nothing during the last collision pass.
    pub air: f32,
    /// Used when the point hit a collider during the last collision pass.
    pub contact: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            extensibility: 5.0,
            consistency: 0.5,
            solve_iterations: DEFAULT_SOLVE_ITERATIONS,
            can_self_repair: false,
            corners: CornerLocks::default(),
            gravity: GRAVITY,
            mass: 1.0,
            wind_multiplier: 1.0,
            friction: FrictionConfig::default(),
            colliders: Vec::new(),
        }
    }
}

impl Default for CornerLocks {
    fn default() -> Self {
        Self {
            a: true,
            b: true,
            c: false,
            d: false,
        }
    }
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            air: AIR_FRICTION,
            contact: CONTACT_FRICTION,
        }
    }
}

impl CornerLocks {
    /// All four corners free.
    pub fn none() -> Self {
        Self {
            a: false,
            b: false,
            c: false,
            d: false,
        }
    }

    /// All four corners pinned.
    pub fn all() -> Self {
        Self {
            a: true,
            b: true,
            c: true,
            d: true,
        }
    }
}

impl ClothConfig {
    /// Cloth that rips easily (links break just past rest length).
    pub fn tearable() -> Self {
        Self {
            extensibility: 1.5,
            ..Default::default()
        }
    }

    /// Cloth that rips but pulls itself back together.
    pub fn self_repairing() -> Self {
        Self {
            extensibility: 1.5,
            can_self_repair: true,
            ..Default::default()
        }
    }

    /// High-quality config (more passes, full-weight shear pass).
    pub fn stiff() -> Self {
        Self {
            solve_iterations: 20,
            consistency: 1.0,
            ..Default::default()
        }
    }

    /// Rest length of diagonal links.
    pub fn diagonal_spacing(&self) -> f32 {
        self.spacing * std::f32::consts::SQRT_2
    }
}
