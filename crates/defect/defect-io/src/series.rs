//! Weekly series CSV input (and output, for the aggregation step).

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use defect_core::{FlowError, WeeklyMeasureRecord};

use crate::errors::{IoError, IoResult};

/// Required columns with their accepted legacy spellings.
const COLUMNS: [(&str, &[&str]); 9] = [
    ("week_start", &[]),
    ("inflow_total", &["defects_inflow_total"]),
    ("outflow_total", &["defects_outflow_total"]),
    ("severity_critical_in", &[]),
    ("severity_high_in", &[]),
    ("severity_medium_in", &[]),
    ("severity_low_in", &[]),
    ("avg_resolution_time_hours", &[]),
    ("backlog_total", &[]),
];

/// One CSV row before required-field checks. Empty cells arrive as `None`.
#[derive(Debug, Deserialize)]
struct RawMeasureRow {
    week_start: Option<NaiveDate>,
    #[serde(alias = "defects_inflow_total")]
    inflow_total: Option<u64>,
    #[serde(alias = "defects_outflow_total")]
    outflow_total: Option<u64>,
    severity_critical_in: Option<u64>,
    severity_high_in: Option<u64>,
    severity_medium_in: Option<u64>,
    severity_low_in: Option<u64>,
    avg_resolution_time_hours: Option<f64>,
    backlog_total: Option<u64>,
}

fn required<T>(value: Option<T>, field: &str, row: usize) -> Result<T, FlowError> {
    value.ok_or_else(|| FlowError::missing_field(field, Some(row)))
}

impl RawMeasureRow {
    fn into_record(self, row: usize) -> Result<WeeklyMeasureRecord, FlowError> {
        Ok(WeeklyMeasureRecord {
            week_start: required(self.week_start, "week_start", row)?,
            inflow_total: required(self.inflow_total, "inflow_total", row)?,
            outflow_total: required(self.outflow_total, "outflow_total", row)?,
            severity_critical_in: required(self.severity_critical_in, "severity_critical_in", row)?,
            severity_high_in: required(self.severity_high_in, "severity_high_in", row)?,
            severity_medium_in: required(self.severity_medium_in, "severity_medium_in", row)?,
            severity_low_in: required(self.severity_low_in, "severity_low_in", row)?,
            avg_resolution_time_hours: required(
                self.avg_resolution_time_hours,
                "avg_resolution_time_hours",
                row,
            )?,
            backlog_total: required(self.backlog_total, "backlog_total", row)?,
        })
    }
}

/// Read the weekly series from a CSV file.
pub fn read_series(path: &Path) -> IoResult<Vec<WeeklyMeasureRecord>> {
    let file = std::fs::File::open(path).map_err(|e| IoError::file(path, e))?;
    let records = read_series_from(file)?;
    tracing::debug!(path = %path.display(), weeks = records.len(), "series loaded");
    Ok(records)
}

/// Read the weekly series from any CSV source with a header row.
///
/// Rows are numbered from 1, not counting the header. `week_start` must be
/// strictly increasing.
pub fn read_series_from<R: Read>(source: R) -> IoResult<Vec<WeeklyMeasureRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for (column, aliases) in COLUMNS {
        let present = headers
            .iter()
            .any(|h| h == column || aliases.contains(&h));
        if !present {
            return Err(FlowError::missing_field(column, None).into());
        }
    }

    let mut records: Vec<WeeklyMeasureRecord> = Vec::new();
    for (i, raw) in reader.deserialize::<RawMeasureRow>().enumerate() {
        let row = i + 1;
        let record = raw?.into_record(row)?;
        if let Some(previous) = records.last() {
            if record.week_start <= previous.week_start {
                return Err(FlowError::OutOfOrder {
                    row,
                    previous: previous.week_start,
                    current: record.week_start,
                }
                .into());
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Write a weekly series as CSV with the canonical column names.
pub fn write_series(path: &Path, records: &[WeeklyMeasureRecord]) -> IoResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IoError::file(parent, e))?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| IoError::file(path, e))?;
    Ok(())
}
