//! Benchmark scenarios: grid size, cloth config and driving forces.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Hanging sheet**: pinned at corners A and B, hangs under gravity
//! 2. **Sphere drape**: free cloth falls onto a sphere
//! 3. **Tear**: tearable cloth pinned at all corners, one corner dragged away

use serde::{Deserialize, Serialize};

use weft_cloth::{ClothConfig, CornerLocks};
use weft_contact::Collider;
use weft_math::Vec3;
use weft_types::constants::DEFAULT_DT;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Cloth pinned at two corners, hanging under gravity.
    HangingSheet,
    /// Cloth draped over a sphere.
    SphereDrape,
    /// Cloth ripped by a dragged corner.
    Tear,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::HangingSheet,
            ScenarioKind::SphereDrape,
            ScenarioKind::Tear,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::HangingSheet => "hanging_sheet",
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::Tear => "tear",
        }
    }

    /// Looks a scenario up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Target grid rows.
    pub rows: usize,
    /// Target grid columns.
    pub columns: usize,
    /// Position of corner A.
    pub origin: Vec3,
    /// Cloth parameters.
    pub config: ClothConfig,
    /// Uniform wind, if any.
    pub wind: Option<Vec3>,
    /// Velocity at which pinned corner D is dragged, if any.
    pub pull: Option<Vec3>,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
    /// Timestep size (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Create the hanging sheet scenario.
    ///
    /// A 20×20 sheet at unit spacing pinned at corners A and B (both ends
    /// of the first column), with a light breeze, for 3 seconds at 50 Hz.
    pub fn hanging_sheet() -> Self {
        Self {
            kind: ScenarioKind::HangingSheet,
            rows: 20,
            columns: 20,
            origin: Vec3::new(0.0, 10.0, 0.0),
            config: ClothConfig::default(),
            wind: Some(Vec3::new(0.0, 0.0, 0.5)),
            pull: None,
            timesteps: 150,
            dt: DEFAULT_DT,
        }
    }

    /// Create the sphere drape scenario.
    ///
    /// A free 16×16 sheet centred over a sphere of radius 4 falls onto it.
    pub fn sphere_drape() -> Self {
        let config = ClothConfig {
            corners: CornerLocks::none(),
            colliders: vec![Collider::sphere(Vec3::ZERO, 4.0)],
            ..Default::default()
        };
        Self {
            kind: ScenarioKind::SphereDrape,
            rows: 16,
            columns: 16,
            origin: Vec3::new(-7.5, 5.0, -7.5),
            config,
            wind: None,
            pull: None,
            timesteps: 200,
            dt: DEFAULT_DT,
        }
    }

    /// Create the tear scenario.
    ///
    /// A tearable 12×12 sheet pinned at all four corners. Corner D is
    /// dragged along +Z, away from C, until the row links give way.
    pub fn tear() -> Self {
        let config = ClothConfig {
            corners: CornerLocks::all(),
            ..ClothConfig::tearable()
        };
        Self {
            kind: ScenarioKind::Tear,
            rows: 12,
            columns: 12,
            origin: Vec3::ZERO,
            config,
            wind: None,
            pull: Some(Vec3::new(0.0, 0.0, 7.5)),
            timesteps: 150,
            dt: DEFAULT_DT,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::HangingSheet => Self::hanging_sheet(),
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::Tear => Self::tear(),
        }
    }

    /// Override the number of timesteps.
    pub fn with_timesteps(mut self, timesteps: u32) -> Self {
        self.timesteps = timesteps;
        self
    }
}
