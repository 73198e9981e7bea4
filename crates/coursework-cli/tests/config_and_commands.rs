//! Integration tests for config loading and the demo command functions.

use std::io::Write;

use coursework_cli::commands::{run_coins, run_exercises, run_geometry, run_vector, GeometryOutputs};
use coursework_cli::config::{load_demo_config, load_or_default, DemoConfig, VectorConfig};

fn output_of<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// DemoConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn demo_config_defaults_match_the_exercise_scripts() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.exercises.legs, (3.0, 4.0));
    assert_eq!(cfg.exercises.total_predictions, 365);
    assert_eq!(cfg.exercises.confusion.fn_, 11);
    assert_eq!(cfg.vectors.scalar, 5.0);
    assert_eq!(cfg.geometry.figures.len(), 4);
}

#[test]
fn demo_config_round_trips_json() {
    let cfg = DemoConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("\"fn\": 11"));
    let cfg2: DemoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg2.geometry.figures, cfg.geometry.figures);
    assert_eq!(cfg2.coins.owner, cfg.coins.owner);
}

#[test]
fn partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"vectors": {{"a": [1.0, 1.0, 1.0]}}}}"#).unwrap();

    let cfg = load_demo_config(&path).unwrap();
    assert_eq!(cfg.vectors.a, vec![1.0, 1.0, 1.0]);
    assert_eq!(cfg.vectors.b, vec![3.0, 4.0]);
    assert_eq!(cfg.exercises.legs, (3.0, 4.0));
}

#[test]
fn load_or_default_without_path() {
    let cfg = load_or_default(None).unwrap();
    assert_eq!(cfg.coins.owner, "Gustav");
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_demo_config(&path).is_err());
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[test]
fn exercises_output() {
    let cfg = DemoConfig::default();
    let text = output_of(|out| run_exercises(&cfg.exercises, out));
    assert!(text.contains("The length of the cathetus is: 4.90."));
    assert!(text.contains("The m-value is: 1.00."));
    assert!(text.contains("The euclidean distance in 3D is: 4.12 length units."));
    assert!(text.contains("more false negatives (11) than false positives (2)"));
}

#[test]
fn exercises_fail_on_vertical_line() {
    let mut cfg = DemoConfig::default();
    cfg.exercises.line_points = [(1.0, 0.0), (1.0, 5.0)];
    let mut buf = Vec::new();
    assert!(run_exercises(&cfg.exercises, &mut buf).is_err());
}

#[test]
fn vector_mismatch_is_reported_not_fatal() {
    let cfg = VectorConfig {
        a: vec![1.0, 2.0],
        b: vec![1.0, 2.0, 3.0],
        scalar: 2.0,
    };
    let text = output_of(|out| run_vector(&cfg, out));
    assert!(text.contains("cannot be combined"));
    assert!(text.contains("a * 2 = (2.0, 4.0)"));
}

#[test]
fn empty_vector_config_errors() {
    let cfg = VectorConfig {
        a: vec![],
        b: vec![1.0],
        scalar: 1.0,
    };
    let mut buf = Vec::new();
    assert!(run_vector(&cfg, &mut buf).is_err());
}

#[test]
fn coins_balance_after_default_run() {
    let cfg = DemoConfig::default();
    let mut buf = Vec::new();
    let stash = run_coins(&cfg.coins, &mut buf).unwrap();
    assert_eq!((stash.riksdaler(), stash.skilling()), (8.0, 40.0));
}

#[test]
fn geometry_reports_equal_sizes() {
    let mut cfg = DemoConfig::default();
    cfg.geometry.figures = serde_json::from_str(
        r#"[{"kind": "circle", "radius": 3.0, "x": -2.0, "y": 3.0},
            {"kind": "circle", "radius": 3.0, "x": 3.0, "y": -2.0},
            {"kind": "rectangle", "length": 4.0, "width": 3.0}]"#,
    )
    .unwrap();
    let text = output_of(|out| run_geometry(&cfg.geometry, GeometryOutputs::default(), out));
    assert!(text.contains("A circle and a circle of equal size."));
    assert!(!text.contains("a rectangle of equal size"));
}

#[test]
fn containment_needs_a_figure() {
    let mut cfg = DemoConfig::default();
    cfg.geometry.figures.clear();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inside.html");
    let outputs = GeometryOutputs {
        containment: Some(path.as_path()),
        ..GeometryOutputs::default()
    };
    let mut buf = Vec::new();
    assert!(run_geometry(&cfg.geometry, outputs, &mut buf).is_err());
}

#[test]
fn negative_margin_is_an_error_not_a_panic() {
    let mut cfg = DemoConfig::default();
    cfg.geometry.margin = -5.0;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inside.html");
    let outputs = GeometryOutputs {
        containment: Some(path.as_path()),
        ..GeometryOutputs::default()
    };
    let mut buf = Vec::new();
    let err = run_geometry(&cfg.geometry, outputs, &mut buf).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid sampling margin"));
    assert!(!path.exists());
}

#[test]
fn unwritable_plot_path_is_an_error() {
    let cfg = DemoConfig::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plot.html");
    let outputs = GeometryOutputs {
        plot: Some(path.as_path()),
        ..GeometryOutputs::default()
    };
    let mut buf = Vec::new();
    let err = run_geometry(&cfg.geometry, outputs, &mut buf).unwrap_err();
    assert!(err.to_string().contains("Failed to write plot"));
}
