//! Benchmark runner: executes scenarios and collects metrics.

use std::time::Instant;

use weft_cloth::{ClothSimulation, NullProxies, ProxyHost, UniformWind};
use weft_math::Vec3;
use weft_telemetry::{EventBus, SimulationEvent};
use weft_types::WeftResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Fails only if the scenario's configuration is invalid.
    pub fn run(scenario: &Scenario) -> WeftResult<BenchmarkMetrics> {
        Self::run_with_bus(scenario, None)
    }

    /// Run a single scenario, publishing per-step events to `bus`.
    pub fn run_with_bus(
        scenario: &Scenario,
        mut bus: Option<&mut EventBus>,
    ) -> WeftResult<BenchmarkMetrics> {
        weft_io::validate_config(&scenario.config)?;

        let config = &scenario.config;
        let mut sim = ClothSimulation::new(scenario.origin, config, NullProxies::new());
        if let Some(wind) = scenario.wind {
            sim.set_wind_field(Box::new(UniformWind(wind)));
        }

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut reference: Option<Vec<Vec3>> = None;
        let mut max_contacts = 0;
        let mut dead_links = 0;

        let total_start = Instant::now();

        for _ in 0..scenario.timesteps {
            // The grid is 1×1 until the first step; only drag the real corner.
            if let (Some(velocity), Some(_)) = (scenario.pull, reference.as_ref()) {
                drag_corner_d(&mut sim, velocity * scenario.dt);
            }

            let report = sim.step(scenario.rows, scenario.columns, config, scenario.dt);
            step_times.push(report.wall_time);
            max_contacts = max_contacts.max(report.contacts);

            if let Some(bus) = bus.as_deref_mut() {
                bus.emit_all(SimulationEvent::from_report(&report, scenario.dt, dead_links));
                bus.flush();
            }
            dead_links = report.dead_links;

            // Displacement is measured from the first full-size state.
            if reference.is_none() {
                reference = Some(sim.positions());
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        let positions = sim.positions();
        let max_displacement = reference
            .as_deref()
            .map(|start| {
                start
                    .iter()
                    .zip(&positions)
                    .map(|(a, b)| a.distance(*b))
                    .fold(0.0f32, f32::max)
            })
            .unwrap_or(0.0);
        let min_height = positions.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().copied().fold(f64::MAX, f64::min)
        };
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        tracing::debug!(
            scenario = scenario.kind.name(),
            total_wall_time,
            dead_links,
            "benchmark finished"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            timesteps: scenario.timesteps,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            max_displacement,
            min_height,
            dead_links,
            max_contacts,
            point_count: sim.graph().point_count(),
            link_count: sim.graph().link_count(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> WeftResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario)?);
        }
        Ok(results)
    }
}

/// Moves corner D by `offset`. The corner is pinned, so the move carries no
/// velocity into the solver.
fn drag_corner_d<P: ProxyHost>(sim: &mut ClothSimulation<P>, offset: Vec3) {
    let [_, _, _, d] = sim.corners();
    if let Some(point) = sim.graph_mut().point_mut(d) {
        let target = point.position() + offset;
        point.teleport(target);
    }
}
