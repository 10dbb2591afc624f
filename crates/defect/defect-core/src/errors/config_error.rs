/// Configuration errors. All of them are fatal and surface before any
/// computation starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration key: {key}")]
    MissingKey { key: String },

    #[error("configuration key {key} out of range: {value} (expected {expected})")]
    OutOfRange {
        key: String,
        value: f64,
        expected: String,
    },

    #[error("failed to parse {format} configuration: {message}")]
    Parse { format: String, message: String },

    #[error("unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: f64, expected: &str) -> Self {
        Self::OutOfRange {
            key: key.to_string(),
            value,
            expected: expected.to_string(),
        }
    }
}
