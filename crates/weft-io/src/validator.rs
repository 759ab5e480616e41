//! Scene and configuration validation.
//!
//! The simulator assumes sane parameters and never fails mid-step, so
//! every value is checked here, before a scene reaches it.

use weft_cloth::ClothConfig;
use weft_contact::Collider;
use weft_types::{WeftError, WeftResult};

use crate::contract::SceneInput;

/// Validates a complete scene.
///
/// Checks:
/// - Grid targets are at least 1×1
/// - Timestep is positive
/// - Cloth parameters and colliders (see [`validate_config`])
pub fn validate_scene(scene: &SceneInput) -> WeftResult<()> {
    if scene.rows == 0 || scene.columns == 0 {
        return Err(WeftError::InvalidConfig(format!(
            "Grid must be at least 1x1, got {}x{}",
            scene.rows, scene.columns
        )));
    }
    positive("dt", scene.dt)?;
    validate_config(&scene.cloth)
}

/// Validates cloth parameters.
pub fn validate_config(config: &ClothConfig) -> WeftResult<()> {
    positive("spacing", config.spacing)?;
    positive("extensibility", config.extensibility)?;
    positive("mass", config.mass)?;
    unit_interval("consistency", config.consistency)?;
    if config.solve_iterations == 0 {
        return Err(WeftError::InvalidConfig(
            "Solve iterations must be >= 1".into(),
        ));
    }

    for (index, collider) in config.colliders.iter().enumerate() {
        validate_collider(index, collider)?;
    }
    Ok(())
}

fn validate_collider(index: usize, collider: &Collider) -> WeftResult<()> {
    if collider.radius() < 0.0 {
        return Err(WeftError::InvalidConfig(format!(
            "Collider {index}: radius must be non-negative"
        )));
    }
    if let Collider::Capsule(capsule) = collider {
        if capsule.height < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "Collider {index}: capsule height must be non-negative"
            )));
        }
    }

    let (reflect, normal) = collider.bounce();
    unit_interval(&format!("collider {index} reflect_bounce"), reflect)?;
    unit_interval(&format!("collider {index} normal_bounce"), normal)
}

// NaN fails both checks below.

fn positive(name: &str, value: f32) -> WeftResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn unit_interval(name: &str, value: f32) -> WeftResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
