//! Output artifacts: derived measures, indicators, forecast-and-plan document.
//!
//! Artifacts are written into a staging directory inside the output directory
//! and moved into place only once all three exist.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use defect_analysis::AnalysisReport;
use defect_core::{DerivedMeasureRecord, HealthIndicatorRecord};

use crate::errors::{IoError, IoResult};

pub const DERIVED_FILE: &str = "derived_measures.csv";
pub const INDICATORS_FILE: &str = "indicators.csv";
pub const FORECAST_FILE: &str = "forecast_and_plan.json";

/// Where a run's artifacts ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub derived: PathBuf,
    pub indicators: PathBuf,
    pub forecast: PathBuf,
}

impl ArtifactPaths {
    fn in_dir(dir: &Path) -> Self {
        Self {
            derived: dir.join(DERIVED_FILE),
            indicators: dir.join(INDICATORS_FILE),
            forecast: dir.join(FORECAST_FILE),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.derived, &self.indicators, &self.forecast]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

/// Flat CSV row: input fields followed by derived fields.
#[derive(Debug, Serialize)]
struct DerivedRow {
    week_start: NaiveDate,
    inflow_total: u64,
    outflow_total: u64,
    severity_critical_in: u64,
    severity_high_in: u64,
    severity_medium_in: u64,
    severity_low_in: u64,
    avg_resolution_time_hours: f64,
    backlog_total: u64,
    net_flow: i64,
    inflow_rate: u64,
    outflow_rate: u64,
    severity_weighted_inflow: f64,
    severe_inflow: u64,
    mttr_hours: f64,
}

impl From<&DerivedMeasureRecord> for DerivedRow {
    fn from(d: &DerivedMeasureRecord) -> Self {
        let m = &d.measure;
        Self {
            week_start: m.week_start,
            inflow_total: m.inflow_total,
            outflow_total: m.outflow_total,
            severity_critical_in: m.severity_critical_in,
            severity_high_in: m.severity_high_in,
            severity_medium_in: m.severity_medium_in,
            severity_low_in: m.severity_low_in,
            avg_resolution_time_hours: m.avg_resolution_time_hours,
            backlog_total: m.backlog_total,
            net_flow: d.net_flow,
            inflow_rate: d.inflow_rate,
            outflow_rate: d.outflow_rate,
            severity_weighted_inflow: d.severity_weighted_inflow,
            severe_inflow: d.severe_inflow,
            mttr_hours: d.mttr_hours,
        }
    }
}

/// Derived row plus the health verdict. The csv serializer does not support
/// flattened structs, so the columns are spelled out.
#[derive(Debug, Serialize)]
struct IndicatorRow {
    week_start: NaiveDate,
    inflow_total: u64,
    outflow_total: u64,
    severity_critical_in: u64,
    severity_high_in: u64,
    severity_medium_in: u64,
    severity_low_in: u64,
    avg_resolution_time_hours: f64,
    backlog_total: u64,
    net_flow: i64,
    inflow_rate: u64,
    outflow_rate: u64,
    severity_weighted_inflow: f64,
    severe_inflow: u64,
    mttr_hours: f64,
    problem_flags: String,
    health_status: &'static str,
}

impl IndicatorRow {
    fn new(d: &DerivedMeasureRecord, h: &HealthIndicatorRecord) -> Self {
        let row = DerivedRow::from(d);
        Self {
            week_start: row.week_start,
            inflow_total: row.inflow_total,
            outflow_total: row.outflow_total,
            severity_critical_in: row.severity_critical_in,
            severity_high_in: row.severity_high_in,
            severity_medium_in: row.severity_medium_in,
            severity_low_in: row.severity_low_in,
            avg_resolution_time_hours: row.avg_resolution_time_hours,
            backlog_total: row.backlog_total,
            net_flow: row.net_flow,
            inflow_rate: row.inflow_rate,
            outflow_rate: row.outflow_rate,
            severity_weighted_inflow: row.severity_weighted_inflow,
            severe_inflow: row.severe_inflow,
            mttr_hours: row.mttr_hours,
            problem_flags: h.problem_flags.to_string(),
            health_status: h.health_status.as_str(),
        }
    }
}

fn write_csv<T: Serialize>(path: &Path, rows: impl IntoIterator<Item = T>) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| IoError::file(path, e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> IoResult<()> {
    let file = std::fs::File::create(path).map_err(|e| IoError::file(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| IoError::file(path, e))
}

/// Write all three artifacts for `report` into `outdir`.
///
/// If any write fails nothing is moved into `outdir`; if a move fails, files
/// already moved are taken back out and earlier artifacts restored. The
/// staging directory is removed on drop.
pub fn write_report(outdir: &Path, report: &AnalysisReport) -> IoResult<ArtifactPaths> {
    std::fs::create_dir_all(outdir).map_err(|e| IoError::file(outdir, e))?;
    let staging = tempfile::Builder::new()
        .prefix(".defect-flow-")
        .tempdir_in(outdir)
        .map_err(|e| IoError::file(outdir, e))?;
    let staged = ArtifactPaths::in_dir(staging.path());

    write_csv(&staged.derived, report.derived.iter().map(DerivedRow::from))?;
    write_csv(
        &staged.indicators,
        report.indicator_rows().map(|(d, h)| IndicatorRow::new(d, h)),
    )?;
    write_json(&staged.forecast, &report.forecast_document())?;

    let target = ArtifactPaths::in_dir(outdir);
    for path in target.iter() {
        if path.is_dir() {
            return Err(IoError::file(
                path,
                std::io::Error::other("artifact path is a directory"),
            ));
        }
    }
    commit(&staged, &target, staging.path())?;
    for path in target.iter() {
        tracing::info!(path = %path.display(), "artifact written");
    }
    Ok(target)
}

/// Move staged artifacts over their targets. Existing targets are parked in
/// `backup_dir` first so a failed move can put them back.
fn commit(staged: &ArtifactPaths, target: &ArtifactPaths, backup_dir: &Path) -> IoResult<()> {
    let mut placed: Vec<(&Path, Option<PathBuf>)> = Vec::new();
    for (from, to) in staged.iter().zip(target.iter()) {
        match place(from, to, backup_dir) {
            Ok(backup) => placed.push((to, backup)),
            Err(err) => {
                rollback(&placed);
                return Err(err);
            }
        }
    }
    Ok(())
}

fn place(from: &Path, to: &Path, backup_dir: &Path) -> IoResult<Option<PathBuf>> {
    let backup = if to.exists() {
        let mut name = OsString::from("previous-");
        name.push(to.file_name().unwrap_or_default());
        let backup = backup_dir.join(name);
        std::fs::rename(to, &backup).map_err(|e| IoError::file(to, e))?;
        Some(backup)
    } else {
        None
    };
    if let Err(e) = std::fs::rename(from, to) {
        if let Some(previous) = &backup {
            let _ = std::fs::rename(previous, to);
        }
        return Err(IoError::file(to, e));
    }
    Ok(backup)
}

fn rollback(placed: &[(&Path, Option<PathBuf>)]) {
    for (to, backup) in placed.iter().rev() {
        let restored = match backup {
            Some(previous) => std::fs::rename(previous, to),
            None => std::fs::remove_file(to),
        };
        if let Err(e) = restored {
            tracing::warn!(path = %to.display(), error = %e, "artifact rollback failed");
        }
    }
}
