//! Forecast and staffing plan values.

use serde::{Deserialize, Serialize};

use super::severity::SeverityTable;

/// Projected weekly flow at the forecast horizon. All values are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub inflow_total: f64,
    pub outflow_total: f64,
    /// Projected inflow per severity, rounded to one decimal.
    pub severity_breakdown: SeverityTable<f64>,
}

/// Staffing derived from a severity-segmented forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub predicted_inflow: f64,
    pub estimated_total_hours: f64,
    pub recommended_engineers: u64,
    pub recommended_qa_hours: f64,
    pub hours_per_defect: SeverityTable<f64>,
}
