//! Measure derivation: raw weekly counts to composite metrics.

pub mod deriver;

pub use deriver::{derive_measures, MeasureDeriver};
