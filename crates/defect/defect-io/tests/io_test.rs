//! File boundary tests: model loading by extension, series round trip through
//! disk, and artifact writing.

use std::fs;

use chrono::{Duration, NaiveDate};

use defect_analysis::AnalysisPipeline;
use defect_core::config::ForecastMethodKind;
use defect_core::{ConfigError, FlowConfig, FlowError, WeeklyMeasureRecord};
use defect_io::{
    load_config, read_series, write_report, write_series, IoError, DERIVED_FILE, FORECAST_FILE,
    INDICATORS_FILE,
};

fn week(i: i64, inflow: u64, outflow: u64, backlog: u64) -> WeeklyMeasureRecord {
    WeeklyMeasureRecord {
        week_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::weeks(i),
        inflow_total: inflow,
        outflow_total: outflow,
        severity_critical_in: 0,
        severity_high_in: 1,
        severity_medium_in: inflow.saturating_sub(2),
        severity_low_in: 1.min(inflow),
        avg_resolution_time_hours: 36.0,
        backlog_total: backlog,
    }
}

fn series() -> Vec<WeeklyMeasureRecord> {
    vec![week(0, 5, 4, 1), week(1, 6, 4, 3), week(2, 7, 4, 6), week(3, 8, 4, 10)]
}

// ---- Model loading ----

#[test]
fn loads_yaml_model_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis_model.yaml");
    fs::write(&path, FlowConfig::default().to_yaml_string().unwrap()).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config, FlowConfig::default());
}

#[test]
fn loads_toml_model_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis_model.toml");
    fs::write(
        &path,
        r#"
[severity_weights]
critical = 10.0
high = 5.0
medium = 2.0
low = 1.0

[forecast]
method = "linreg"
ewma_alpha = 0.5
horizon_weeks = 4

[health_thresholds]
inflow_gt_outflow_consecutive_weeks = 3
backlog_healthy_max = 50.0
critical_severe_window = 4
critical_severe_min = 5.0
healthy_max_per_deployment = 10.0

[resources]
engineer_capacity_hours_per_week = 30.0
qa_share = 0.25

[resources.hours_per_defect]
critical = 16.0
high = 8.0
medium = 4.0
low = 2.0
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.forecast.method, ForecastMethodKind::Linreg);
    assert_eq!(config.forecast.horizon_weeks, 4);
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis_model.ini");
    fs::write(&path, "method = ewma").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(
        err,
        IoError::Flow(FlowError::Config(ConfigError::UnsupportedFormat { .. }))
    ));
}

#[test]
fn missing_model_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, IoError::File { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

// ---- Series ----

#[test]
fn series_survives_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("base_measures.csv");
    write_series(&path, &series()).unwrap();

    assert_eq!(read_series(&path).unwrap(), series());
}

// ---- Artifacts ----

#[test]
fn report_writes_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("outputs");
    let report = AnalysisPipeline::new(FlowConfig::default())
        .run(&series(), Some(2))
        .unwrap();

    let paths = write_report(&outdir, &report).unwrap();
    assert_eq!(paths.derived, outdir.join(DERIVED_FILE));
    assert_eq!(paths.indicators, outdir.join(INDICATORS_FILE));
    assert_eq!(paths.forecast, outdir.join(FORECAST_FILE));

    let derived = fs::read_to_string(&paths.derived).unwrap();
    let mut lines = derived.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("week_start,inflow_total,outflow_total"));
    assert!(header.ends_with("severity_weighted_inflow,severe_inflow,mttr_hours"));
    assert_eq!(lines.count(), 4);

    let indicators = fs::read_to_string(&paths.indicators).unwrap();
    assert!(indicators
        .lines()
        .next()
        .unwrap()
        .ends_with("problem_flags,health_status"));
    assert_eq!(indicators.lines().count(), 5);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.forecast).unwrap()).unwrap();
    assert_eq!(json["horizon_weeks"], 2);
    assert!(json["forecast"]["severity_breakdown_inflow"]["medium"].is_number());
    assert!(json["resource_plan"]["recommended_engineers"].is_u64());

    // Only the artifacts remain; the staging directory is gone.
    let mut entries: Vec<_> = fs::read_dir(&outdir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, vec![DERIVED_FILE, FORECAST_FILE, INDICATORS_FILE]);
}

#[test]
fn blocked_artifact_path_leaves_outdir_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("outputs");
    fs::create_dir_all(outdir.join(FORECAST_FILE)).unwrap();
    fs::write(outdir.join(DERIVED_FILE), "previous run").unwrap();
    let report = AnalysisPipeline::new(FlowConfig::default())
        .run(&series(), None)
        .unwrap();

    let err = write_report(&outdir, &report).unwrap_err();
    assert!(matches!(err, IoError::File { .. }));
    assert!(err.to_string().contains(FORECAST_FILE));

    assert_eq!(
        fs::read_to_string(outdir.join(DERIVED_FILE)).unwrap(),
        "previous run"
    );
    assert!(!outdir.join(INDICATORS_FILE).exists());
    let mut entries: Vec<_> = fs::read_dir(&outdir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, vec![DERIVED_FILE, FORECAST_FILE]);
}

#[test]
fn rerun_replaces_previous_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DERIVED_FILE), "previous run").unwrap();
    let report = AnalysisPipeline::new(FlowConfig::default())
        .run(&series(), None)
        .unwrap();

    let paths = write_report(dir.path(), &report).unwrap();
    let derived = fs::read_to_string(&paths.derived).unwrap();
    assert!(derived.starts_with("week_start,"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn indicator_flags_are_comma_joined() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = FlowConfig::default();
    config.health_thresholds.backlog_healthy_max = 8.0;
    let report = AnalysisPipeline::new(config).run(&series(), None).unwrap();

    let paths = write_report(dir.path(), &report).unwrap();
    let mut reader = csv::Reader::from_path(&paths.indicators).unwrap();
    let last = reader.records().last().unwrap().unwrap();
    let flags_at = reader
        .headers()
        .unwrap()
        .iter()
        .position(|h| h == "problem_flags")
        .unwrap();
    assert_eq!(&last[flags_at], "inflow>outflow,backlog_high");
    assert_eq!(last.iter().last(), Some("red"));
}
