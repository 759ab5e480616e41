//! # weft-cloth
//!
//! A tearable Verlet cloth: a grid of point masses joined by breakable
//! distance links, relaxed Gauss-Seidel style, resolved against colliders,
//! and resizable one row or column at a time while it runs.
//!
//! ## Key Types
//!
//! - [`ClothSimulation`] — owns the grid and runs the per-step pipeline
//! - [`ClothGraph`] — arena of [`Point`]s and [`Link`]s addressed by id
//! - [`ClothConfig`] — spacing, tear threshold, passes, pins, forces, colliders
//! - [`ProxyHost`] — external renderables attached to points
//! - [`WindField`] — external wind velocity field

pub mod config;
pub mod graph;
pub mod link;
pub mod point;
pub mod proxy;
pub mod report;
pub mod simulation;
pub mod topology;
pub mod wind;

pub use config::{ClothConfig, CornerLocks, FrictionConfig};
pub use graph::ClothGraph;
pub use link::{Link, LinkFilter, LinkKind};
pub use point::Point;
pub use proxy::{NullProxies, ProxyHost, ProxyPose, RecordingProxies};
pub use report::StepReport;
pub use simulation::ClothSimulation;
pub use wind::{UniformWind, WindField};
