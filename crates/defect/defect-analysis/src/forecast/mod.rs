//! Inflow/outflow forecasting with automatic method selection.

pub mod ewma;
pub mod forecaster;
pub mod linreg;
pub mod method;
pub mod severity_mix;

pub use forecaster::{ForecastOutcome, Forecaster};
pub use linreg::LinearFit;
pub use method::{select_method, ForecastMethod, MethodSelection, SelectionEvent};
pub use severity_mix::SeverityMix;
