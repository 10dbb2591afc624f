//! Resource planner: forecasted defects to engineering and QA hours.

use defect_core::config::ResourceConfig;
use defect_core::{ResourcePlan, SeverityTable};

use crate::numeric::round1;

#[derive(Debug, Clone)]
pub struct ResourcePlanner {
    config: ResourceConfig,
}

impl ResourcePlanner {
    pub fn new(config: ResourceConfig) -> Self {
        Self { config }
    }

    /// Unrounded effort for a severity breakdown: Σ hours_per_defect × count.
    pub fn estimate_hours(&self, severity_forecast: &SeverityTable<f64>) -> f64 {
        self.config.hours_per_defect.weighted_sum(severity_forecast)
    }

    /// Engineers needed to absorb `total_hours` in one week.
    ///
    /// Zero or negative capacity means capacity is undefined and yields 0.
    pub fn engineers_for(&self, total_hours: f64) -> u64 {
        let capacity = self.config.engineer_capacity_hours_per_week;
        if capacity > 0.0 {
            (total_hours / capacity).ceil().max(0.0) as u64
        } else {
            0
        }
    }

    /// Build the plan. `predicted_inflow` is echoed for reporting only; the
    /// effort comes from the severity breakdown.
    pub fn plan(
        &self,
        predicted_inflow: f64,
        severity_forecast: &SeverityTable<f64>,
    ) -> ResourcePlan {
        let total_hours = self.estimate_hours(severity_forecast);
        let engineers = self.engineers_for(total_hours);
        let qa_hours = total_hours * self.config.qa_share;

        tracing::debug!(total_hours, engineers, qa_hours, "resource plan computed");

        ResourcePlan {
            predicted_inflow: round1(predicted_inflow),
            estimated_total_hours: round1(total_hours),
            recommended_engineers: engineers,
            recommended_qa_hours: round1(qa_hours),
            hours_per_defect: self.config.hours_per_defect,
        }
    }
}
