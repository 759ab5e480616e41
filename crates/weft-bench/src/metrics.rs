//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Largest point displacement since the grid reached full size.
    pub max_displacement: f32,
    /// Height of the lowest point at the end of the run.
    pub min_height: f32,
    /// Torn links at the end of the run.
    pub dead_links: usize,
    /// Largest number of points in contact during one step.
    pub max_contacts: usize,
    /// Point count.
    pub point_count: usize,
    /// Link count, torn links included.
    pub link_count: usize,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,point_count,link_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,max_displacement,min_height,dead_links,max_contacts".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6},{:.6},{},{}",
            self.scenario,
            self.point_count,
            self.link_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.max_displacement,
            self.min_height,
            self.dead_links,
            self.max_contacts,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
