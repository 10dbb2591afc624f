//! Pure, per-row derivation of composite metrics.
//!
//! Output is one-to-one with the input and in the same order. Nothing is
//! dropped, reordered, or carried between rows.

use defect_core::types::severity::SeverityTable;
use defect_core::{DerivedMeasureRecord, WeeklyMeasureRecord};

/// Derives composite metrics using the configured severity weights.
#[derive(Debug, Clone)]
pub struct MeasureDeriver {
    weights: SeverityTable<f64>,
}

impl MeasureDeriver {
    pub fn new(weights: SeverityTable<f64>) -> Self {
        Self { weights }
    }

    /// Derive a single week.
    pub fn derive(&self, record: &WeeklyMeasureRecord) -> DerivedMeasureRecord {
        let severity_in = record.severity_in();
        let counts = severity_in.map(|_, c| *c as f64);
        let severe_inflow = severity_in
            .iter()
            .filter(|(severity, _)| severity.is_severe())
            .map(|(_, c)| *c)
            .sum();
        DerivedMeasureRecord {
            measure: record.clone(),
            net_flow: record.inflow_total as i64 - record.outflow_total as i64,
            inflow_rate: record.inflow_total,
            outflow_rate: record.outflow_total,
            severity_weighted_inflow: self.weights.weighted_sum(&counts),
            severe_inflow,
            mttr_hours: record.avg_resolution_time_hours,
        }
    }

    /// Derive the whole series.
    pub fn derive_all(&self, records: &[WeeklyMeasureRecord]) -> Vec<DerivedMeasureRecord> {
        records.iter().map(|r| self.derive(r)).collect()
    }
}

/// Convenience wrapper around [`MeasureDeriver::derive_all`].
pub fn derive_measures(
    records: &[WeeklyMeasureRecord],
    weights: &SeverityTable<f64>,
) -> Vec<DerivedMeasureRecord> {
    MeasureDeriver::new(*weights).derive_all(records)
}
