//! Health classifier: assigns problem flags and a traffic-light status to
//! every week using only that week and the weeks before it.

use defect_core::config::HealthThresholds;
use defect_core::{
    DerivedMeasureRecord, HealthIndicatorRecord, HealthStatus, ProblemFlag, ProblemFlags,
};

use super::window::{RollingSum, Streak};

/// Evaluates the rolling-window rules in a single forward pass.
#[derive(Debug, Clone)]
pub struct HealthClassifier {
    thresholds: HealthThresholds,
}

impl HealthClassifier {
    pub fn new(thresholds: HealthThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify every week of the series.
    ///
    /// Rules, in evaluation order:
    /// 1. `inflow>outflow` when inflow exceeded outflow in each of the last
    ///    `inflow_gt_outflow_consecutive_weeks` weeks.
    /// 2. `backlog_high` when this week's backlog is above `backlog_healthy_max`.
    /// 3. `severe_spike` when severe inflow summed over the last
    ///    `critical_severe_window` weeks (fewer at the start) reaches
    ///    `critical_severe_min`.
    pub fn classify(&self, series: &[DerivedMeasureRecord]) -> Vec<HealthIndicatorRecord> {
        let th = &self.thresholds;
        let consecutive = th.inflow_gt_outflow_consecutive_weeks as usize;
        let mut streak = Streak::new();
        let mut severe = RollingSum::new(th.critical_severe_window as usize);

        series
            .iter()
            .map(|week| {
                streak.push(week.inflow_total() > week.outflow_total());
                severe.push(week.severe_inflow);

                let mut flags = ProblemFlags::new();
                if streak.holds_for(consecutive) {
                    flags.push(ProblemFlag::InflowExceedsOutflow);
                }
                if week.backlog_total() as f64 > th.backlog_healthy_max {
                    flags.push(ProblemFlag::BacklogHigh);
                }
                if severe.sum() as f64 >= th.critical_severe_min {
                    flags.push(ProblemFlag::SevereSpike);
                }

                let health_status = assign_status(&flags, week.inflow_total(), th);
                HealthIndicatorRecord {
                    week_start: week.week_start(),
                    problem_flags: flags,
                    health_status,
                }
            })
            .collect()
    }
}

/// Status priority: red, then yellow, then green-if-quiet.
pub fn assign_status(
    flags: &ProblemFlags,
    inflow_total: u64,
    th: &HealthThresholds,
) -> HealthStatus {
    let compound = flags.contains(ProblemFlag::InflowExceedsOutflow)
        && flags.contains(ProblemFlag::BacklogHigh);
    if flags.contains(ProblemFlag::SevereSpike) || compound {
        HealthStatus::Red
    } else if !flags.is_empty() {
        HealthStatus::Yellow
    } else if inflow_total as f64 <= th.healthy_max_per_deployment {
        HealthStatus::Green
    } else {
        HealthStatus::Yellow
    }
}
