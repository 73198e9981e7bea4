//! CLI binary smoke tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("coursework").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exercises"))
        .stdout(predicate::str::contains("geometry"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursework"));
}

// ---------------------------------------------------------------------------
// Demos with default inputs
// ---------------------------------------------------------------------------

#[test]
fn exercises_print_reference_values() {
    cmd()
        .arg("exercises")
        .assert()
        .success()
        .stdout(predicate::str::contains("hypotenuse is: 5.00"))
        .stdout(predicate::str::contains("k-value is: 0.75"))
        .stdout(predicate::str::contains("distance is: 5.10"))
        .stdout(predicate::str::contains("weather prediction model is: 0.82"))
        .stdout(predicate::str::contains("fire prediction model is: 0.987"));
}

#[test]
fn vector_demo() {
    cmd()
        .arg("vector")
        .assert()
        .success()
        .stdout(predicate::str::contains("a + b = (4.0, 6.0)"))
        .stdout(predicate::str::contains("5 * a = (5.0, 10.0)"));
}

#[test]
fn coins_demo_rejects_overdraw() {
    cmd()
        .arg("coins")
        .assert()
        .success()
        .stdout(predicate::str::contains("Withdrawal rejected"))
        .stdout(predicate::str::contains(
            "Coins in stash: 8 riksdaler and 40 skillingar.",
        ));
}

#[test]
fn geometry_writes_plots_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let plot = dir.path().join("plot.html");
    let containment = dir.path().join("inside.html");
    let report = dir.path().join("report.html");
    cmd()
        .arg("geometry")
        .arg("--plot")
        .arg(&plot)
        .arg("--containment")
        .arg(&containment)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("The radius of the circle is: 2.5"))
        .stdout(predicate::str::contains("sampled points are inside the circle"));
    assert!(plot.exists());
    assert!(containment.exists());
    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("Lab 3 shapes"));
}

#[test]
fn geometry_plot_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["--plot", "--containment"] {
        let path = dir.path().join("missing").join("plot.html");
        cmd()
            .arg("geometry")
            .arg(flag)
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to write plot"));
    }
}

// ---------------------------------------------------------------------------
// Config handling
// ---------------------------------------------------------------------------

#[test]
fn config_prints_template() {
    cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exercises\""))
        .stdout(predicate::str::contains("\"kind\": \"circle\""));
}

#[test]
fn nonexistent_config_errors() {
    cmd()
        .args(["exercises", "/nonexistent/config.json"])
        .assert()
        .failure();
}

#[test]
fn invalid_figure_in_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"geometry": {"figures": [{"kind": "circle", "radius": -1.0}]}}"#,
    )
    .unwrap();
    cmd()
        .arg("geometry")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
