use chrono::NaiveDate;

use super::ConfigError;

/// Top-level error type for the analytics engine.
/// Every variant is fatal: a run that hits one writes no artifacts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("missing field `{field}`{}", .row.map(|r| format!(" in row {r}")).unwrap_or_default())]
    MissingField { field: String, row: Option<usize> },

    #[error("insufficient data for {method}: need at least {required} weeks, got {actual}")]
    InsufficientData {
        method: String,
        required: usize,
        actual: usize,
    },

    #[error("week_start must be strictly increasing: row {row} has {current} after {previous}")]
    OutOfOrder {
        row: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },
}

impl FlowError {
    pub fn missing_field(field: &str, row: Option<usize>) -> Self {
        Self::MissingField {
            field: field.to_string(),
            row,
        }
    }
}

/// Convenience type alias.
pub type FlowResult<T> = Result<T, FlowError>;
