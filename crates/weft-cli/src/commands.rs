//! CLI command implementations.

use std::path::Path;

use weft_bench::metrics::BenchmarkMetrics;
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::{Scenario, ScenarioKind};
use weft_cloth::{ClothSimulation, LinkKind, RecordingProxies, UniformWind};
use weft_io::{load_scene, validate_scene, write_output, SceneMetrics, SceneOutput};
use weft_telemetry::{EventBus, SimulationEvent, TracingSink};

/// Run a scene file.
pub fn simulate(scene_path: &str, output_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Simulation");
    println!("───────────────");
    println!("Scene: {scene_path}");
    println!();

    let scene = load_scene(Path::new(scene_path))?;
    validate_scene(&scene)?;
    tracing::info!(
        rows = scene.rows,
        columns = scene.columns,
        steps = scene.steps,
        colliders = scene.cloth.colliders.len(),
        "scene loaded"
    );

    let mut sim = ClothSimulation::new(scene.origin, &scene.cloth, RecordingProxies::new());
    if let Some(wind) = scene.wind {
        sim.set_wind_field(Box::new(UniformWind(wind)));
    }

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut metrics = SceneMetrics::default();
    for _ in 0..scene.steps {
        let report = sim.step(scene.rows, scene.columns, &scene.cloth, scene.dt);
        bus.emit_all(SimulationEvent::from_report(&report, scene.dt, metrics.dead_links));
        bus.flush();

        metrics.wall_time_seconds += report.wall_time;
        metrics.timestep_count += 1;
        metrics.dead_links = report.dead_links;
        metrics.max_contacts = metrics.max_contacts.max(report.contacts);
    }
    bus.finish();

    let output = SceneOutput::capture(&sim, metrics);
    let structural = sim.graph().count_kind(LinkKind::Row) + sim.graph().count_kind(LinkKind::Column);

    println!("Grid:          {}x{}", output.rows, output.columns);
    println!("Steps:         {} ({:.2}s simulated)", output.metrics.timestep_count, scene.duration());
    println!("Points:        {}", output.points.len());
    println!(
        "Links:         {} ({} structural, {} diagonal)",
        output.links.len(),
        structural,
        sim.graph().count_kind(LinkKind::Diagonal)
    );
    println!("Torn links:    {}", output.metrics.dead_links);
    println!("Max contacts:  {}", output.metrics.max_contacts);
    println!("Lowest point:  {:.4}", output.metrics.min_height);
    println!("Wall time:     {:.3}s", output.metrics.wall_time_seconds);

    if let Some(path) = output_path {
        write_output(Path::new(path), &output)?;
        println!();
        println!("State written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({}x{} grid, {} steps)",
            kind.name(),
            scenario.rows,
            scenario.columns,
            scenario.timesteps,
        );

        let metrics = BenchmarkRunner::run_with_bus(&scenario, Some(&mut bus))
            .map_err(|e| format!("Benchmark failed: {e}"))?;
        tracing::info!(
            scenario = kind.name(),
            wall_time = metrics.total_wall_time,
            dead_links = metrics.dead_links,
            "benchmark finished"
        );

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Torn links:    {}", metrics.dead_links);
        println!();

        all_metrics.push(metrics);
    }
    bus.finish();

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a scene file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Weft Validator");
    println!("──────────────");
    println!();
    println!("Validating scene: {path}");

    let scene = load_scene(Path::new(path))?;
    match validate_scene(&scene) {
        Ok(()) => println!(
            "✅ Scene is valid ({}x{} grid, {} steps, {} colliders).",
            scene.rows,
            scene.columns,
            scene.steps,
            scene.cloth.colliders.len()
        ),
        Err(e) => {
            tracing::warn!(path, error = %e, "scene rejected");
            println!("❌ Scene validation failed: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}
