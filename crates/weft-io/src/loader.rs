//! Scene file loading and result export.
//!
//! Scenes are TOML or JSON; the format is picked from the file extension.

use std::fs;
use std::path::Path;

use weft_types::{WeftError, WeftResult};

use crate::contract::{SceneInput, SceneOutput};

/// Supported scene file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Toml,
    Json,
}

impl SceneFormat {
    /// Format implied by `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> WeftResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(WeftError::InvalidConfig(format!(
                "Unsupported scene file '{}': expected .toml or .json",
                path.display()
            ))),
        }
    }
}

/// Parses a scene from text.
pub fn parse_scene(text: &str, format: SceneFormat) -> WeftResult<SceneInput> {
    match format {
        SceneFormat::Toml => toml::from_str(text).map_err(|e| WeftError::Serialization(e.to_string())),
        SceneFormat::Json => {
            serde_json::from_str(text).map_err(|e| WeftError::Serialization(e.to_string()))
        }
    }
}

/// Reads and parses a scene file. Does not validate it.
pub fn load_scene(path: &Path) -> WeftResult<SceneInput> {
    let format = SceneFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    let scene = parse_scene(&text, format)?;
    tracing::debug!(
        path = %path.display(),
        rows = scene.rows,
        columns = scene.columns,
        steps = scene.steps,
        "loaded scene"
    );
    Ok(scene)
}

/// Writes a run result as pretty-printed JSON.
pub fn write_output(path: &Path, output: &SceneOutput) -> WeftResult<()> {
    let json =
        serde_json::to_string_pretty(output).map_err(|e| WeftError::Serialization(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
