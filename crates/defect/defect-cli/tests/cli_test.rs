//! Binary-level tests: run `defect-flow` against files in a temp directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SERIES: &str = "\
week_start,inflow_total,outflow_total,severity_critical_in,severity_high_in,severity_medium_in,severity_low_in,avg_resolution_time_hours,backlog_total
2024-01-01,5,4,0,0,3,2,36,1
2024-01-08,6,4,0,1,3,2,36,3
2024-01-15,7,4,0,1,4,2,36,6
2024-01-22,8,4,0,1,5,2,36,10
";

fn defect_flow(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_defect-flow"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn write_inputs(dir: &Path) {
    fs::create_dir_all(dir.join("data")).unwrap();
    fs::create_dir_all(dir.join("config")).unwrap();
    fs::write(dir.join("data/base_measures.csv"), SERIES).unwrap();
    let model = defect_flow(dir, &["analyze", "--print-default-config"]);
    assert!(model.status.success());
    fs::write(dir.join("config/analysis_model.yaml"), model.stdout).unwrap();
}

#[test]
fn analyze_with_defaults_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let out = defect_flow(dir.path(), &["analyze", "--horizon", "2"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("# Forecast (2 week ahead)"));
    assert!(stdout.contains("recommended_engineers"));
    for file in ["derived_measures.csv", "indicators.csv", "forecast_and_plan.json"] {
        assert!(dir.path().join("outputs").join(file).is_file(), "{file} missing");
    }
}

#[test]
fn long_horizon_reports_auto_switch() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let out = defect_flow(dir.path(), &["analyze", "--horizon", "6"]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("auto-switch"));
}

#[test]
fn invalid_model_fails_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(
        dir.path().join("config/analysis_model.yaml"),
        "severity_weights: {critical: 10, high: 5, medium: 2}\n",
    )
    .unwrap();

    let out = defect_flow(dir.path(), &["analyze"]);
    assert!(!out.status.success());
    assert!(!dir.path().join("outputs").exists());
}

#[test]
fn aggregate_builds_weekly_series() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("issues.json"),
        r#"[
  {"created_at": "2024-01-02T10:00:00Z", "closed_at": "2024-01-09T10:00:00Z",
   "labels": [{"name": "severity: high"}]},
  {"created_at": "2024-01-03T10:00:00Z", "labels": ["P0"]},
  {"created_at": "2024-01-04T10:00:00Z", "pull_request": {}}
]"#,
    )
    .unwrap();

    let out = defect_flow(
        dir.path(),
        &[
            "aggregate",
            "--issues",
            "issues.json",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-14",
            "--out",
            "data/weekly.csv",
        ],
    );
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let csv = fs::read_to_string(dir.path().join("data/weekly.csv")).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("2024-01-01,2,0,1,1,0,0,"));
    assert!(rows[2].starts_with("2024-01-08,0,1,0,0,0,0,"));
}
