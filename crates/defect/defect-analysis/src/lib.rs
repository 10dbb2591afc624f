//! # defect-analysis
//!
//! Analytics engine for weekly defect-flow series.
//! Contains the measure deriver, health classifier, forecaster, resource
//! planner, and the batch pipeline that runs them in dependency order.

#![allow(clippy::module_inception)]

pub mod forecast;
pub mod health;
pub mod measures;
pub mod numeric;
pub mod pipeline;
pub mod planning;

pub use forecast::{ForecastMethod, ForecastOutcome, Forecaster, MethodSelection, SelectionEvent};
pub use health::HealthClassifier;
pub use measures::MeasureDeriver;
pub use pipeline::{AnalysisPipeline, AnalysisReport, ForecastDocument};
pub use planning::ResourcePlanner;
