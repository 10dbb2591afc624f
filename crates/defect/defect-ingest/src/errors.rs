use chrono::NaiveDate;

/// Ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("invalid date range: since {since} is after until {until}")]
    InvalidRange { since: NaiveDate, until: NaiveDate },

    #[error("failed to parse issue export: {0}")]
    Parse(#[from] serde_json::Error),
}
