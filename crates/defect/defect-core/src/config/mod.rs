//! Validated analysis model configuration.
//!
//! Every key is required and range-checked once at load time. Unknown keys are
//! ignored so a model file can carry settings for other tools.

pub mod forecast_config;
pub mod health_config;
pub mod resource_config;

use serde::{Deserialize, Serialize};

pub use forecast_config::{ForecastConfig, ForecastMethodKind};
pub use health_config::HealthThresholds;
pub use resource_config::ResourceConfig;

use crate::errors::ConfigError;
use crate::types::severity::SeverityTable;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub severity_weights: SeverityTable<f64>,
    pub forecast: ForecastConfig,
    pub health_thresholds: HealthThresholds,
    pub resources: ResourceConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            severity_weights: SeverityTable::new(10.0, 5.0, 2.0, 1.0),
            forecast: ForecastConfig::default(),
            health_thresholds: HealthThresholds::default(),
            resources: ResourceConfig::default(),
        }
    }
}

impl FlowConfig {
    /// Parse and validate a YAML model.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| parse_error("yaml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML model.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| parse_error("toml", e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as YAML (used to print the baseline model).
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| parse_error("yaml", e.to_string()))
    }

    /// Range-check every value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (severity, weight) in self.severity_weights.iter() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(ConfigError::out_of_range(
                    &format!("severity_weights.{severity}"),
                    *weight,
                    "> 0",
                ));
            }
        }
        self.forecast.validate()?;
        self.health_thresholds.validate()?;
        self.resources.validate()?;
        Ok(())
    }
}

/// Serde reports absent keys as "missing field `name`"; surface those as
/// [`ConfigError::MissingKey`] and everything else as a parse failure.
fn parse_error(format: &str, message: String) -> ConfigError {
    const MARKER: &str = "missing field `";
    if let Some(start) = message.find(MARKER) {
        let rest = &message[start + MARKER.len()..];
        if let Some(end) = rest.find('`') {
            return ConfigError::MissingKey {
                key: rest[..end].to_string(),
            };
        }
    }
    ConfigError::Parse {
        format: format.to_string(),
        message,
    }
}

/// Shared range check for non-negative thresholds.
pub(crate) fn require_non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::out_of_range(key, value, ">= 0"));
    }
    Ok(())
}
