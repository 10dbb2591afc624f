//! # defect-core
//!
//! Foundation crate for the defect-flow analytics engine.
//! Defines the weekly measurement model, validated configuration, error kinds,
//! constants, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FlowConfig;
pub use errors::{ConfigError, FlowError, FlowResult};
pub use types::forecast::{ForecastResult, ResourcePlan};
pub use types::health::{HealthIndicatorRecord, HealthStatus, ProblemFlag, ProblemFlags};
pub use types::measures::{DerivedMeasureRecord, WeeklyMeasureRecord};
pub use types::severity::{Severity, SeverityTable};
