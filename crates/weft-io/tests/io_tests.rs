//! Integration tests for weft-io.

use std::path::Path;

use approx::assert_relative_eq;
use weft_cloth::{ClothConfig, ClothSimulation, LinkKind, RecordingProxies};
use weft_contact::{CapsuleCollider, Collider, SphereCollider};
use weft_io::contract::{SceneInput, SceneMetrics, SceneOutput};
use weft_io::loader::{parse_scene, SceneFormat};
use weft_io::validator::{validate_config, validate_scene};
use weft_math::Vec3;

const SCENE_TOML: &str = r#"
rows = 6
columns = 4
dt = 0.01
steps = 120
origin = [0.0, 5.0, 0.0]
wind = [1.0, 0.0, 0.5]

[cloth]
spacing = 0.5
extensibility = 1.5
can_self_repair = true

[cloth.corners]
a = true
b = false
c = true

[[cloth.colliders]]
shape = "sphere"
center = [1.0, 2.0, 1.0]
radius = 0.75

[[cloth.colliders]]
shape = "capsule"
center = [0.0, 0.0, 0.0]
height = 1.0
radius = 0.25
reflect_bounce = 0.5
"#;

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn default_scene() {
    let scene = SceneInput::default();
    assert_eq!((scene.rows, scene.columns), (10, 10));
    assert_relative_eq!(scene.dt, 0.02);
    assert!(scene.wind.is_none());
    assert_relative_eq!(scene.duration(), 5.0, epsilon = 1e-4);
}

#[test]
fn toml_scene_parses() {
    let scene = parse_scene(SCENE_TOML, SceneFormat::Toml).unwrap();
    assert_eq!((scene.rows, scene.columns, scene.steps), (6, 4, 120));
    assert_eq!(scene.origin, Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(scene.wind, Some(Vec3::new(1.0, 0.0, 0.5)));
    assert_eq!(scene.cloth.spacing, 0.5);
    assert!(scene.cloth.can_self_repair);
    assert!(!scene.cloth.corners.b);
    assert!(scene.cloth.corners.c);
    // Unnamed fields keep their defaults.
    assert_eq!(scene.cloth.solve_iterations, 5);
    assert!(!scene.cloth.corners.d);

    assert_eq!(scene.cloth.colliders.len(), 2);
    assert_eq!(
        scene.cloth.colliders[0],
        Collider::Sphere(SphereCollider::new(Vec3::new(1.0, 2.0, 1.0), 0.75))
    );
    match &scene.cloth.colliders[1] {
        Collider::Capsule(c) => {
            assert_eq!(c.axis, Vec3::Y);
            assert_eq!(c.reflect_bounce, 0.5);
            assert_eq!(c.normal_bounce, 0.75);
        }
        other => panic!("expected capsule, got {other:?}"),
    }
    assert!(validate_scene(&scene).is_ok());
}

#[test]
fn json_scene_round_trip() {
    let scene = parse_scene(SCENE_TOML, SceneFormat::Toml).unwrap();
    let json = serde_json::to_string(&scene).unwrap();
    let recovered = parse_scene(&json, SceneFormat::Json).unwrap();
    assert_eq!(recovered, scene);
}

#[test]
fn empty_scene_is_default() {
    let scene = parse_scene("", SceneFormat::Toml).unwrap();
    assert_eq!(scene, SceneInput::default());
    let scene = parse_scene("{}", SceneFormat::Json).unwrap();
    assert_eq!(scene, SceneInput::default());
}

#[test]
fn malformed_scene_is_serialization_error() {
    let err = parse_scene("rows = \"many\"", SceneFormat::Toml).unwrap_err();
    assert!(err.to_string().contains("Serialization"));
    let err = parse_scene(r#"{"cloth": {"colliders": [{"shape": "cube"}]}}"#, SceneFormat::Json)
        .unwrap_err();
    assert!(err.to_string().contains("Serialization"));
}

#[test]
fn format_from_extension() {
    assert_eq!(SceneFormat::from_path(Path::new("a/scene.toml")).unwrap(), SceneFormat::Toml);
    assert_eq!(SceneFormat::from_path(Path::new("scene.JSON")).unwrap(), SceneFormat::Json);
    assert!(SceneFormat::from_path(Path::new("scene.yaml")).is_err());
    assert!(SceneFormat::from_path(Path::new("scene")).is_err());
}

#[test]
fn missing_file_is_io_error() {
    let err = weft_io::load_scene(Path::new("/nonexistent/weft/scene.toml")).unwrap_err();
    assert!(matches!(err, weft_types::WeftError::Io(_)));
}

#[test]
fn capture_exports_grid() {
    let config = ClothConfig::default();
    let mut sim = ClothSimulation::new(Vec3::ZERO, &config, RecordingProxies::new());
    for _ in 0..3 {
        sim.step(3, 3, &config, 0.02);
    }

    let metrics = SceneMetrics {
        timestep_count: 3,
        ..Default::default()
    };
    let output = SceneOutput::capture(&sim, metrics);

    assert_eq!((output.rows, output.columns), (3, 3));
    assert_eq!(output.points.len(), 9);
    assert_eq!(output.links.len(), 20);
    assert_eq!(output.metrics.timestep_count, 3);
    assert_eq!((output.points[5].row, output.points[5].column), (1, 2));
    assert!(output.points[0].locked);

    let diagonals = output.links.iter().filter(|l| l.kind == LinkKind::Diagonal).count();
    assert_eq!(diagonals, 8);
    assert!(output.links.iter().all(|l| l.a < 9 && l.b < 9 && !l.dead));

    let lowest = output.points.iter().map(|p| p.position.y).fold(f32::INFINITY, f32::min);
    assert_eq!(output.metrics.min_height, lowest);

    let json = serde_json::to_string(&output).unwrap();
    let recovered: SceneOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.links, output.links);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&ClothConfig::default()).is_ok());
    assert!(validate_config(&ClothConfig::tearable()).is_ok());
    assert!(validate_config(&ClothConfig::stiff()).is_ok());
    assert!(validate_scene(&SceneInput::default()).is_ok());
}

#[test]
fn empty_grid_rejected() {
    let scene = SceneInput {
        rows: 0,
        ..Default::default()
    };
    assert!(validate_scene(&scene).is_err());
    let scene = SceneInput {
        columns: 0,
        ..Default::default()
    };
    assert!(validate_scene(&scene).is_err());
}

#[test]
fn non_positive_dt_rejected() {
    for dt in [0.0, -0.01, f32::NAN] {
        let scene = SceneInput {
            dt,
            ..Default::default()
        };
        assert!(validate_scene(&scene).is_err(), "dt = {dt}");
    }
}

#[test]
fn non_positive_parameters_rejected() {
    let cases: [fn(&mut ClothConfig); 3] = [
        |c| c.spacing = 0.0,
        |c| c.extensibility = -1.0,
        |c| c.mass = 0.0,
    ];
    for mutate in cases {
        let mut config = ClothConfig::default();
        mutate(&mut config);
        assert!(validate_config(&config).is_err());
    }
}

#[test]
fn consistency_must_be_a_weight() {
    let mut config = ClothConfig::default();
    config.consistency = 0.0;
    assert!(validate_config(&config).is_ok());
    config.consistency = 1.0;
    assert!(validate_config(&config).is_ok());
    config.consistency = 1.5;
    assert!(validate_config(&config).is_err());
    config.consistency = -0.1;
    assert!(validate_config(&config).is_err());
}

#[test]
fn zero_iterations_rejected() {
    let mut config = ClothConfig::default();
    config.solve_iterations = 0;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("iterations"));
}

#[test]
fn bad_colliders_rejected() {
    let mut config = ClothConfig::default();
    config.colliders = vec![Collider::sphere(Vec3::ZERO, -1.0)];
    assert!(validate_config(&config).is_err());

    config.colliders = vec![Collider::capsule(Vec3::ZERO, -0.5, 1.0)];
    assert!(validate_config(&config).is_err());

    config.colliders = vec![SphereCollider::new(Vec3::ZERO, 1.0).with_bounce(1.2, 0.5).into()];
    assert!(validate_config(&config).is_err());

    config.colliders = vec![CapsuleCollider::new(Vec3::ZERO, 1.0, 0.5).with_bounce(0.5, -0.1).into()];
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("normal_bounce"));

    config.colliders = vec![Collider::sphere(Vec3::ZERO, 0.0)];
    assert!(validate_config(&config).is_ok());
}
