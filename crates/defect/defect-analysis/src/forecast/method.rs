//! Forecast method dispatch and horizon-driven selection.

use std::fmt;

use serde::Serialize;

use defect_core::config::ForecastMethodKind;
use defect_core::constants::EWMA_MAX_HORIZON_WEEKS;
use defect_core::FlowResult;

use super::{ewma, linreg};

/// A concrete projection method with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForecastMethod {
    Ewma { alpha: f64 },
    LinearRegression,
}

impl ForecastMethod {
    /// Project `series` `horizon` weeks ahead.
    pub fn project(&self, series: &[f64], horizon: u32) -> FlowResult<f64> {
        match self {
            Self::Ewma { alpha } => ewma::project(series, *alpha, horizon),
            Self::LinearRegression => linreg::project(series, horizon),
        }
    }

    pub fn kind(&self) -> ForecastMethodKind {
        match self {
            Self::Ewma { .. } => ForecastMethodKind::Ewma,
            Self::LinearRegression => ForecastMethodKind::Linreg,
        }
    }
}

/// Something the caller should know about how the method was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// EWMA was configured but the horizon is too long for it.
    AutoSwitch {
        from: ForecastMethodKind,
        to: ForecastMethodKind,
        horizon: u32,
    },
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoSwitch { from, to, horizon } => write!(
                f,
                "(auto-switch) using {to} instead of {from} for horizon={horizon}"
            ),
        }
    }
}

/// Outcome of method selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodSelection {
    pub configured: ForecastMethodKind,
    pub method: ForecastMethod,
    pub event: Option<SelectionEvent>,
}

/// Choose the projection method for `horizon`.
///
/// EWMA is only trusted up to three weeks out; longer horizons switch to
/// linear regression and report the switch as a [`SelectionEvent`].
pub fn select_method(configured: ForecastMethodKind, alpha: f64, horizon: u32) -> MethodSelection {
    match configured {
        ForecastMethodKind::Ewma if horizon > EWMA_MAX_HORIZON_WEEKS => MethodSelection {
            configured,
            method: ForecastMethod::LinearRegression,
            event: Some(SelectionEvent::AutoSwitch {
                from: ForecastMethodKind::Ewma,
                to: ForecastMethodKind::Linreg,
                horizon,
            }),
        },
        ForecastMethodKind::Ewma => MethodSelection {
            configured,
            method: ForecastMethod::Ewma { alpha },
            event: None,
        },
        ForecastMethodKind::Linreg => MethodSelection {
            configured,
            method: ForecastMethod::LinearRegression,
            event: None,
        },
    }
}
