//! Staffing model.

use serde::{Deserialize, Serialize};

use super::require_non_negative;
use crate::errors::ConfigError;
use crate::types::severity::SeverityTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub hours_per_defect: SeverityTable<f64>,
    /// Zero or negative means capacity is undefined; the planner then
    /// recommends no engineers instead of failing.
    pub engineer_capacity_hours_per_week: f64,
    /// Fraction of the estimated hours reserved for QA, in [0, 1].
    pub qa_share: f64,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            hours_per_defect: SeverityTable::new(16.0, 8.0, 4.0, 2.0),
            engineer_capacity_hours_per_week: 30.0,
            qa_share: 0.25,
        }
    }
}

impl ResourceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (severity, hours) in self.hours_per_defect.iter() {
            require_non_negative(&format!("resources.hours_per_defect.{severity}"), *hours)?;
        }
        if !self.engineer_capacity_hours_per_week.is_finite() {
            return Err(ConfigError::out_of_range(
                "resources.engineer_capacity_hours_per_week",
                self.engineer_capacity_hours_per_week,
                "a finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.qa_share) {
            return Err(ConfigError::out_of_range(
                "resources.qa_share",
                self.qa_share,
                "in [0, 1]",
            ));
        }
        Ok(())
    }
}
