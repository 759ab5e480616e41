//! # weft-io
//!
//! Scene file contract, loading and validation.
//!
//! Defines the boundary types that external callers (the CLI, tools,
//! asset pipelines) use to describe a cloth run and read its result.

pub mod contract;
pub mod loader;
pub mod validator;

pub use contract::{LinkState, PointState, SceneInput, SceneMetrics, SceneOutput};
pub use loader::{load_scene, parse_scene, write_output, SceneFormat};
pub use validator::{validate_config, validate_scene};
