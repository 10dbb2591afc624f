//! # defect-ingest
//!
//! Turns a list of tracker issues into the gap-free weekly measurement series
//! the analytics engine consumes. Network access is not part of this crate;
//! callers hand in already-exported issues.

pub mod aggregator;
pub mod errors;
pub mod issue;
pub mod severity;
pub mod week;

pub use aggregator::{aggregate, AggregationOptions, WeeklyAggregator};
pub use errors::IngestError;
pub use issue::{parse_issues, IssueRecord};
pub use severity::classify_severity;
pub use week::week_start_of;
