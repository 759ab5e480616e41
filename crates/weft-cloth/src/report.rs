//! Per-step summary returned by the simulator.

use serde::{Deserialize, Serialize};

/// Result of a simulation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Index of the step just run (0-indexed).
    pub timestep: u32,
    /// Grid rows after reconciliation.
    pub rows: usize,
    /// Grid columns after reconciliation.
    pub columns: usize,
    /// Live points.
    pub point_count: usize,
    /// Links in the graph, torn ones included.
    pub link_count: usize,
    /// Torn links.
    pub dead_links: usize,
    /// Points that hit a collider this step.
    pub contacts: usize,
    /// Whether rows or columns were added or removed.
    pub topology_changed: bool,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}
