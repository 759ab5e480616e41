//! Scene input/output contract types.
//!
//! Serializable for CLI configuration and export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use weft_cloth::{ClothConfig, ClothSimulation, LinkKind, ProxyHost};
use weft_math::Vec3;
use weft_types::constants::DEFAULT_DT;
use weft_types::PointId;

/// Everything needed to set up and run a cloth scene.
///
/// Missing fields take their defaults, so a scene file only has to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneInput {
    /// Target grid rows.
    pub rows: usize,
    /// Target grid columns.
    pub columns: usize,
    /// Fixed step length (seconds).
    pub dt: f32,
    /// Number of steps to run.
    pub steps: u32,
    /// Position of corner A.
    pub origin: Vec3,
    /// Uniform wind velocity, if any.
    pub wind: Option<Vec3>,
    /// Cloth parameters.
    pub cloth: ClothConfig,
}

impl Default for SceneInput {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            dt: DEFAULT_DT,
            steps: 250,
            origin: Vec3::ZERO,
            wind: None,
            cloth: ClothConfig::default(),
        }
    }
}

impl SceneInput {
    /// Simulated time covered by the run (seconds).
    pub fn duration(&self) -> f32 {
        self.steps as f32 * self.dt
    }
}

/// Final state of a point, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointState {
    pub row: usize,
    pub column: usize,
    pub position: Vec3,
    pub locked: bool,
}

/// Final state of a link. Endpoints are row-major indices into `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkState {
    pub a: usize,
    pub b: usize,
    pub kind: LinkKind,
    pub rest_length: f32,
    pub dead: bool,
}

/// Aggregate metrics from a scene run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneMetrics {
    /// Total wall-clock time spent in `step` (seconds).
    pub wall_time_seconds: f64,
    /// Number of steps executed.
    pub timestep_count: u32,
    /// Dead links at the end of the run.
    pub dead_links: usize,
    /// Largest number of points in contact during a single step.
    pub max_contacts: usize,
    /// Lowest point height at the end of the run.
    pub min_height: f32,
}

/// Output of a completed scene run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneOutput {
    pub rows: usize,
    pub columns: usize,
    pub points: Vec<PointState>,
    pub links: Vec<LinkState>,
    pub metrics: SceneMetrics,
}

impl SceneOutput {
    /// Snapshots the cloth. `metrics.min_height` is filled in from the
    /// captured points; the other metrics are taken as given.
    pub fn capture<P: ProxyHost>(sim: &ClothSimulation<P>, metrics: SceneMetrics) -> Self {
        let graph = sim.graph();
        let mut index: HashMap<PointId, usize> = HashMap::new();
        let mut points = Vec::with_capacity(sim.rows() * sim.columns());

        for row in 0..sim.rows() {
            for column in 0..sim.columns() {
                let Some(id) = sim.point_id(row, column) else {
                    continue;
                };
                let Some(point) = graph.point(id) else {
                    continue;
                };
                index.insert(id, points.len());
                points.push(PointState {
                    row,
                    column,
                    position: point.position(),
                    locked: point.is_locked(),
                });
            }
        }

        // Walk links through their owners so the export order follows the grid.
        let mut links = Vec::with_capacity(graph.link_count());
        for state in &points {
            let Some(owner) = sim.point_id(state.row, state.column) else {
                continue;
            };
            let Some(point) = graph.point(owner) else {
                continue;
            };
            for link in point.links().iter().filter_map(|&id| graph.link(id)) {
                if let (Some(&a), Some(&b)) = (index.get(&link.a()), index.get(&link.b())) {
                    links.push(LinkState {
                        a,
                        b,
                        kind: link.kind(),
                        rest_length: link.rest_length(),
                        dead: link.is_dead(),
                    });
                }
            }
        }

        let min_height = points
            .iter()
            .map(|p| p.position.y)
            .fold(f32::INFINITY, f32::min);

        Self {
            rows: sim.rows(),
            columns: sim.columns(),
            points,
            links,
            metrics: SceneMetrics {
                min_height,
                ..metrics
            },
        }
    }
}
