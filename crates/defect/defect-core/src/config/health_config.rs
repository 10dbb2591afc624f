//! Health classifier thresholds.

use serde::{Deserialize, Serialize};

use super::require_non_negative;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Weeks in a row with inflow above outflow before `inflow>outflow` fires.
    pub inflow_gt_outflow_consecutive_weeks: u32,
    pub backlog_healthy_max: f64,
    /// Window, in weeks, over which severe inflow is summed.
    pub critical_severe_window: u32,
    pub critical_severe_min: f64,
    /// Highest weekly inflow still considered green when no flag fired.
    pub healthy_max_per_deployment: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            inflow_gt_outflow_consecutive_weeks: 3,
            backlog_healthy_max: 50.0,
            critical_severe_window: 4,
            critical_severe_min: 5.0,
            healthy_max_per_deployment: 10.0,
        }
    }
}

impl HealthThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inflow_gt_outflow_consecutive_weeks == 0 {
            return Err(ConfigError::out_of_range(
                "health_thresholds.inflow_gt_outflow_consecutive_weeks",
                0.0,
                ">= 1",
            ));
        }
        if self.critical_severe_window == 0 {
            return Err(ConfigError::out_of_range(
                "health_thresholds.critical_severe_window",
                0.0,
                ">= 1",
            ));
        }
        require_non_negative("health_thresholds.backlog_healthy_max", self.backlog_healthy_max)?;
        require_non_negative("health_thresholds.critical_severe_min", self.critical_severe_min)?;
        require_non_negative(
            "health_thresholds.healthy_max_per_deployment",
            self.healthy_max_per_deployment,
        )
    }
}
