//! Batch pipeline: derive → {classify ∥ forecast} → plan.
//!
//! The classifier and forecaster only read the derived series, so they run
//! side by side on the rayon pool. The planner waits for the forecast.

use serde::Serialize;

use defect_core::{
    DerivedMeasureRecord, FlowConfig, FlowResult, ForecastResult, HealthIndicatorRecord,
    ResourcePlan, SeverityTable, WeeklyMeasureRecord,
};

use crate::forecast::{ForecastOutcome, Forecaster, MethodSelection};
use crate::health::HealthClassifier;
use crate::measures::MeasureDeriver;
use crate::numeric::round1;
use crate::planning::ResourcePlanner;

/// Everything one run produces. Nothing is written until the whole report
/// exists, so a failing run leaves no partial artifacts behind.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub horizon_weeks: u32,
    pub derived: Vec<DerivedMeasureRecord>,
    pub indicators: Vec<HealthIndicatorRecord>,
    pub selection: MethodSelection,
    pub forecast: ForecastResult,
    pub plan: ResourcePlan,
}

impl AnalysisReport {
    /// Derived rows paired with their health verdicts.
    pub fn indicator_rows(
        &self,
    ) -> impl Iterator<Item = (&DerivedMeasureRecord, &HealthIndicatorRecord)> + '_ {
        self.derived.iter().zip(&self.indicators)
    }

    /// The forecast-and-plan document.
    pub fn forecast_document(&self) -> ForecastDocument {
        ForecastDocument {
            horizon_weeks: self.horizon_weeks,
            forecast: ForecastSection {
                inflow_total: round1(self.forecast.inflow_total),
                outflow_total: round1(self.forecast.outflow_total),
                severity_breakdown_inflow: self.forecast.severity_breakdown,
            },
            resource_plan: self.plan.clone(),
        }
    }
}

/// Serialized shape of `forecast_and_plan.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDocument {
    pub horizon_weeks: u32,
    pub forecast: ForecastSection,
    pub resource_plan: ResourcePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSection {
    pub inflow_total: f64,
    pub outflow_total: f64,
    pub severity_breakdown_inflow: SeverityTable<f64>,
}

/// Runs all four stages over a complete weekly series.
pub struct AnalysisPipeline {
    config: FlowConfig,
}

impl AnalysisPipeline {
    pub fn new(config: FlowConfig) -> Self {
        Self { config }
    }

    /// Run the full analysis. `horizon_override` replaces the configured
    /// forecast horizon when given.
    pub fn run(
        &self,
        records: &[WeeklyMeasureRecord],
        horizon_override: Option<u32>,
    ) -> FlowResult<AnalysisReport> {
        self.config.validate()?;

        let derived = MeasureDeriver::new(self.config.severity_weights).derive_all(records);
        tracing::debug!(weeks = derived.len(), "measures derived");

        let classifier = HealthClassifier::new(self.config.health_thresholds.clone());
        let forecaster = Forecaster::new(self.config.forecast.clone());
        let (indicators, outcome) = rayon::join(
            || classifier.classify(&derived),
            || forecaster.forecast(&derived, horizon_override),
        );
        let ForecastOutcome {
            horizon_weeks,
            selection,
            result: forecast,
        } = outcome?;
        tracing::debug!(
            weeks = indicators.len(),
            method = %selection.method.kind(),
            "classification and forecast complete"
        );

        let plan = ResourcePlanner::new(self.config.resources.clone())
            .plan(forecast.inflow_total, &forecast.severity_breakdown);

        Ok(AnalysisReport {
            horizon_weeks,
            derived,
            indicators,
            selection,
            forecast,
            plan,
        })
    }
}
