use std::path::PathBuf;

use defect_core::{ConfigError, FlowError};

/// Errors at the file boundary.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigError> for IoError {
    fn from(err: ConfigError) -> Self {
        Self::Flow(FlowError::Config(err))
    }
}

impl IoError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;
