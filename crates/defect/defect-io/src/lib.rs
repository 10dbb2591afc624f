//! # defect-io
//!
//! File boundary of the defect-flow engine: reads the weekly series and the
//! analysis model, writes the derived, indicator, and forecast artifacts.

pub mod artifacts;
pub mod config_loader;
pub mod errors;
pub mod series;

pub use artifacts::{write_report, ArtifactPaths, DERIVED_FILE, FORECAST_FILE, INDICATORS_FILE};
pub use config_loader::load_config;
pub use errors::{IoError, IoResult};
pub use series::{read_series, read_series_from, write_series};
