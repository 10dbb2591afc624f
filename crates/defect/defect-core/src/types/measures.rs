//! Weekly measurement records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::severity::SeverityTable;

/// Raw defect-flow counts for one calendar week.
///
/// Severity counts are expected to sum to at most `inflow_total`; this is not
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMeasureRecord {
    pub week_start: NaiveDate,
    pub inflow_total: u64,
    pub outflow_total: u64,
    pub severity_critical_in: u64,
    pub severity_high_in: u64,
    pub severity_medium_in: u64,
    pub severity_low_in: u64,
    pub avg_resolution_time_hours: f64,
    pub backlog_total: u64,
}

impl WeeklyMeasureRecord {
    pub fn severity_in(&self) -> SeverityTable<u64> {
        SeverityTable::new(
            self.severity_critical_in,
            self.severity_high_in,
            self.severity_medium_in,
            self.severity_low_in,
        )
    }
}

/// A weekly record plus the composite metrics derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMeasureRecord {
    pub measure: WeeklyMeasureRecord,
    /// `inflow_total - outflow_total`; negative when the backlog shrinks.
    pub net_flow: i64,
    pub inflow_rate: u64,
    pub outflow_rate: u64,
    pub severity_weighted_inflow: f64,
    /// Critical plus high inflow.
    pub severe_inflow: u64,
    pub mttr_hours: f64,
}

impl DerivedMeasureRecord {
    pub fn week_start(&self) -> NaiveDate {
        self.measure.week_start
    }

    pub fn inflow_total(&self) -> u64 {
        self.measure.inflow_total
    }

    pub fn outflow_total(&self) -> u64 {
        self.measure.outflow_total
    }

    pub fn backlog_total(&self) -> u64 {
        self.measure.backlog_total
    }
}
