//! Ordinary least-squares trend extrapolation over `x = 0..n-1`.

use statrs::statistics::Statistics;

use defect_core::constants::LINREG_MIN_POINTS;
use defect_core::{FlowError, FlowResult};

/// Fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of observations the line was fitted on.
    pub n: usize,
}

impl LinearFit {
    /// Fit against `x = 0, 1, …, n-1`. Needs at least two points.
    pub fn fit(series: &[f64]) -> FlowResult<Self> {
        let n = series.len();
        if n < LINREG_MIN_POINTS {
            return Err(FlowError::InsufficientData {
                method: "linreg".to_string(),
                required: LINREG_MIN_POINTS,
                actual: n,
            });
        }

        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let x_mean = xs.iter().mean();
        let y_mean = series.iter().mean();

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for (x, y) in xs.iter().zip(series) {
            let dx = x - x_mean;
            sxy += dx * (y - y_mean);
            sxx += dx * dx;
        }
        // sxx > 0 for n >= 2 since the x values are distinct.
        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            n,
        })
    }

    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Value `h` steps past the last observation: `slope·(n-1+h) + intercept`.
    pub fn project(&self, h: u32) -> f64 {
        self.at((self.n - 1) as f64 + h as f64)
    }

    /// Projections for `h = 1..=horizon`.
    pub fn trajectory(&self, horizon: u32) -> Vec<f64> {
        (1..=horizon).map(|h| self.project(h)).collect()
    }
}

/// Fit and project `horizon` weeks ahead.
pub fn project(series: &[f64], horizon: u32) -> FlowResult<f64> {
    Ok(LinearFit::fit(series)?.project(horizon))
}
