//! Forecast subsystem configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configured projection method. Long horizons may still switch EWMA to
/// linear regression at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastMethodKind {
    Ewma,
    Linreg,
}

impl ForecastMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ewma => "ewma",
            Self::Linreg => "linreg",
        }
    }
}

impl std::fmt::Display for ForecastMethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub method: ForecastMethodKind,
    /// Smoothing factor, strictly between 0 and 1.
    pub ewma_alpha: f64,
    pub horizon_weeks: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            method: ForecastMethodKind::Ewma,
            ewma_alpha: 0.5,
            horizon_weeks: 1,
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_alpha(self.ewma_alpha)?;
        validate_horizon(self.horizon_weeks)
    }
}

pub fn validate_alpha(alpha: f64) -> Result<(), ConfigError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ConfigError::out_of_range("forecast.ewma_alpha", alpha, "in (0, 1)"));
    }
    Ok(())
}

pub fn validate_horizon(horizon_weeks: u32) -> Result<(), ConfigError> {
    if horizon_weeks == 0 {
        return Err(ConfigError::out_of_range(
            "forecast.horizon_weeks",
            0.0,
            ">= 1",
        ));
    }
    Ok(())
}
