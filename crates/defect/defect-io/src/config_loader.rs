//! Analysis model loading.

use std::path::Path;

use defect_core::{ConfigError, FlowConfig};

use crate::errors::{IoError, IoResult};

/// Load and validate a model file. `.toml` is parsed as TOML; `.yaml`, `.yml`
/// and extension-less files as YAML.
pub fn load_config(path: &Path) -> IoResult<FlowConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| IoError::file(path, e))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let config = match extension.as_deref() {
        Some("toml") => FlowConfig::from_toml_str(&text)?,
        Some("yaml") | Some("yml") | None => FlowConfig::from_yaml_str(&text)?,
        Some(_) => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into())
        }
    };
    tracing::debug!(
        path = %path.display(),
        method = %config.forecast.method,
        "configuration loaded"
    );
    Ok(config)
}
