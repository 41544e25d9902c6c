use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

const SAMPLE: &str = r#"{
  "baseTemperature": 8.0,
  "monthlyVariance": [
    { "year": 1900, "month": 1, "variance": -0.5 },
    { "year": 1900, "month": 2, "variance": 0.3 },
    { "year": 1910, "month": 1, "variance": 1.2 },
    { "year": 1910, "month": 12, "variance": -1.1 }
  ]
}"#;

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let p = dir.join("global-temperature.json");
    fs::write(&p, SAMPLE).unwrap();
    p
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("tooltip"));
}

#[test]
fn render_from_file_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let plot = dir.path().join("chart.svg");
    let csv = dir.path().join("readings.csv");
    let scene = dir.path().join("scene.json");

    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--plot")
        .arg(&plot)
        .arg("--out")
        .arg(&csv)
        .arg("--scene")
        .arg(&scene)
        .arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1900 - 1910"))
        .stdout(predicate::str::contains("January"));

    assert!(fs::read_to_string(&plot).unwrap().contains("<svg"));
    let csv_text = fs::read_to_string(&csv).unwrap();
    assert!(csv_text.contains("1910,11,December,-1.1,6.9"));
    let scene: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&scene).unwrap()).unwrap();
    assert_eq!(scene["cells"].as_array().unwrap().len(), 4);
}

#[test]
fn tooltip_prints_formatted_reading() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("tooltip")
        .arg("--input")
        .arg(&input)
        .args(["--year", "1900", "--month", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1900 - January"))
        .stdout(predicate::str::contains("7.5℃"))
        .stdout(predicate::str::contains("-0.5℃"));
}

#[test]
fn tooltip_for_missing_reading_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());

    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("tooltip")
        .arg("--input")
        .arg(&input)
        .args(["--year", "1905", "--month", "3"]);
    cmd.assert().failure();
}

#[test]
fn bad_month_in_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(
        &input,
        r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1900, "month": 13, "variance": 0.0}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--plot")
        .arg(dir.path().join("x.svg"));
    cmd.assert().failure();
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn render_online_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("heatmap").unwrap();
    cmd.arg("render")
        .arg("--plot")
        .arg(dir.path().join("live.svg"))
        .arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("base temperature 8.66"));
}
