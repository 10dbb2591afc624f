//! Forecaster: projects inflow and outflow and splits inflow by severity.

use defect_core::config::forecast_config::{validate_alpha, validate_horizon};
use defect_core::config::ForecastConfig;
use defect_core::{DerivedMeasureRecord, FlowResult, ForecastResult};

use super::method::{select_method, MethodSelection};
use super::severity_mix::SeverityMix;
use crate::numeric::non_negative;

/// Result of a forecast run, with the method actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub horizon_weeks: u32,
    pub selection: MethodSelection,
    pub result: ForecastResult,
}

#[derive(Debug, Clone)]
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// The horizon used for a run: the explicit override, else the configured one.
    pub fn effective_horizon(&self, horizon_override: Option<u32>) -> u32 {
        horizon_override.unwrap_or(self.config.horizon_weeks)
    }

    /// Forecast `horizon_override` (or the configured horizon) weeks ahead.
    pub fn forecast(
        &self,
        series: &[DerivedMeasureRecord],
        horizon_override: Option<u32>,
    ) -> FlowResult<ForecastOutcome> {
        let horizon = self.effective_horizon(horizon_override);
        validate_horizon(horizon)?;
        validate_alpha(self.config.ewma_alpha)?;

        let selection = select_method(self.config.method, self.config.ewma_alpha, horizon);
        if let Some(event) = &selection.event {
            tracing::info!(
                configured = %selection.configured,
                selected = %selection.method.kind(),
                horizon,
                "{event}"
            );
        }

        let inflow: Vec<f64> = series.iter().map(|w| w.inflow_total() as f64).collect();
        let outflow: Vec<f64> = series.iter().map(|w| w.outflow_total() as f64).collect();
        let inflow_forecast = selection.method.project(&inflow, horizon)?;
        let outflow_forecast = selection.method.project(&outflow, horizon)?;

        let severity_breakdown = SeverityMix::from_recent(series).apportion(inflow_forecast);
        tracing::debug!(
            weeks = series.len(),
            horizon,
            inflow_forecast,
            outflow_forecast,
            "forecast computed"
        );

        Ok(ForecastOutcome {
            horizon_weeks: horizon,
            selection,
            result: ForecastResult {
                inflow_total: non_negative(inflow_forecast),
                outflow_total: non_negative(outflow_forecast),
                severity_breakdown,
            },
        })
    }
}
