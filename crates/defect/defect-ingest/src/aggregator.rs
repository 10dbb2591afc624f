//! Weekly aggregation of issues into measurement records.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use defect_core::constants::DEFAULT_RESOLUTION_HOURS;
use defect_core::{SeverityTable, WeeklyMeasureRecord};

use crate::errors::IngestError;
use crate::issue::IssueRecord;
use crate::severity::classify_severity;
use crate::week::{week_range, week_start_of};

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationOptions {
    /// Resolution time reported for weeks in which nothing was closed.
    pub default_resolution_hours: f64,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            default_resolution_hours: DEFAULT_RESOLUTION_HOURS,
        }
    }
}

#[derive(Debug, Default)]
struct WeekBucket {
    inflow: u64,
    outflow: u64,
    severity: SeverityTable<u64>,
    resolution_hours: f64,
    resolved: u64,
}

/// Buckets issues created in `[since, until]` (whole days, UTC) into weeks.
///
/// Inflow and severity count at the creation week, outflow and resolution
/// time at the closing week. Pull requests are skipped.
#[derive(Debug)]
pub struct WeeklyAggregator {
    since: NaiveDate,
    until: NaiveDate,
    options: AggregationOptions,
    buckets: BTreeMap<NaiveDate, WeekBucket>,
    skipped: usize,
}

impl WeeklyAggregator {
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self, IngestError> {
        Self::with_options(since, until, AggregationOptions::default())
    }

    pub fn with_options(
        since: NaiveDate,
        until: NaiveDate,
        options: AggregationOptions,
    ) -> Result<Self, IngestError> {
        if since > until {
            return Err(IngestError::InvalidRange { since, until });
        }
        Ok(Self {
            since,
            until,
            options,
            buckets: BTreeMap::new(),
            skipped: 0,
        })
    }

    fn in_range(&self, at: DateTime<Utc>) -> bool {
        let day = at.date_naive();
        self.since <= day && day <= self.until
    }

    /// Add one issue. Returns whether it was counted.
    pub fn add(&mut self, issue: &IssueRecord) -> bool {
        if issue.is_pull_request || !self.in_range(issue.created_at) {
            self.skipped += 1;
            return false;
        }

        let opened = self
            .buckets
            .entry(week_start_of(issue.created_at.date_naive()))
            .or_default();
        opened.inflow += 1;
        *opened.severity.get_mut(classify_severity(&issue.labels)) += 1;

        if let Some(closed_at) = issue.closed_at {
            let closed = self
                .buckets
                .entry(week_start_of(closed_at.date_naive()))
                .or_default();
            closed.outflow += 1;
            if let Some(hours) = issue.resolution_hours() {
                closed.resolution_hours += hours.max(0.0);
                closed.resolved += 1;
            }
        }
        true
    }

    pub fn extend<'a>(&mut self, issues: impl IntoIterator<Item = &'a IssueRecord>) {
        for issue in issues {
            self.add(issue);
        }
    }

    /// Issues ignored so far (pull requests or out of range).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Emit one record per week from the first to the last observed week.
    /// Gaps are zero-filled and the backlog is a running, never-negative total.
    pub fn finish(self) -> Vec<WeeklyMeasureRecord> {
        let (Some(first), Some(last)) = (
            self.buckets.keys().next().copied(),
            self.buckets.keys().next_back().copied(),
        ) else {
            tracing::warn!(since = %self.since, until = %self.until, "no issues found in range");
            return Vec::new();
        };

        let empty = WeekBucket::default();
        let mut backlog: u64 = 0;
        let records: Vec<WeeklyMeasureRecord> = week_range(first, last)
            .map(|week_start| {
                let bucket = self.buckets.get(&week_start).unwrap_or(&empty);
                backlog = (backlog + bucket.inflow).saturating_sub(bucket.outflow);
                let avg_resolution_time_hours = if bucket.resolved > 0 {
                    bucket.resolution_hours / bucket.resolved as f64
                } else {
                    self.options.default_resolution_hours
                };
                WeeklyMeasureRecord {
                    week_start,
                    inflow_total: bucket.inflow,
                    outflow_total: bucket.outflow,
                    severity_critical_in: bucket.severity.critical,
                    severity_high_in: bucket.severity.high,
                    severity_medium_in: bucket.severity.medium,
                    severity_low_in: bucket.severity.low,
                    avg_resolution_time_hours,
                    backlog_total: backlog,
                }
            })
            .collect();

        tracing::debug!(
            weeks = records.len(),
            skipped = self.skipped,
            "weekly measures aggregated"
        );
        records
    }
}

/// Aggregate a batch of issues in one call.
pub fn aggregate(
    issues: &[IssueRecord],
    since: NaiveDate,
    until: NaiveDate,
    options: AggregationOptions,
) -> Result<Vec<WeeklyMeasureRecord>, IngestError> {
    let mut aggregator = WeeklyAggregator::with_options(since, until, options)?;
    aggregator.extend(issues);
    Ok(aggregator.finish())
}
