//! Severity mix of recent inflow, used to split an inflow forecast by tier.

use statrs::statistics::Statistics;

use defect_core::constants::RECENT_MIX_WEEKS;
use defect_core::{DerivedMeasureRecord, Severity, SeverityTable};

use crate::numeric::{non_negative, round1};

/// Fraction of inflow per severity, averaged over recent weeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityMix {
    pub fractions: SeverityTable<f64>,
}

impl SeverityMix {
    /// Mix over the last [`RECENT_MIX_WEEKS`] weeks.
    pub fn from_recent(series: &[DerivedMeasureRecord]) -> Self {
        Self::from_window(series, RECENT_MIX_WEEKS)
    }

    /// Mix over the last `window` weeks (all weeks when fewer are available).
    ///
    /// Each tier's fraction is its average weekly count divided by the average
    /// weekly inflow. A zero average inflow divides by 1.0 instead.
    pub fn from_window(series: &[DerivedMeasureRecord], window: usize) -> Self {
        let recent = &series[series.len().saturating_sub(window)..];
        if recent.is_empty() {
            return Self {
                fractions: SeverityTable::default(),
            };
        }

        let avg_inflow = recent.iter().map(|w| w.inflow_total() as f64).mean();
        let total = if avg_inflow == 0.0 { 1.0 } else { avg_inflow };

        let fractions = SeverityTable::from_fn(|severity| {
            let avg = recent
                .iter()
                .map(|w| *w.measure.severity_in().get(severity) as f64)
                .mean();
            avg / total
        });
        Self { fractions }
    }

    pub fn fraction(&self, severity: Severity) -> f64 {
        *self.fractions.get(severity)
    }

    /// Split `inflow_forecast` across tiers, rounded to one decimal and
    /// clamped at zero.
    pub fn apportion(&self, inflow_forecast: f64) -> SeverityTable<f64> {
        self.fractions
            .map(|_, fraction| non_negative(round1(fraction * inflow_forecast)))
    }
}
