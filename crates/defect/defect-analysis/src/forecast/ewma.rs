//! Fixed-anchor exponential smoothing.
//!
//! The projection repeatedly blends the *last observed value* into the running
//! forecast: `f ← α·last + (1−α)·f`, with `last` held fixed for every step.
//! Closed form after `h` steps: `last − (last − f₀)·(1−α)^h`.
//!
//! Starting from `f₀ = last`, every step returns `last` again, so the EWMA
//! projection is flat at the last observation for any horizon. It never
//! extrapolates a trend; that is what the linear-regression method is for.

use defect_core::constants::EWMA_MIN_POINTS;
use defect_core::{FlowError, FlowResult};

/// Project `horizon` weeks ahead from the last value of `series`.
pub fn project(series: &[f64], alpha: f64, horizon: u32) -> FlowResult<f64> {
    let last = series.last().copied().ok_or(FlowError::InsufficientData {
        method: "ewma".to_string(),
        required: EWMA_MIN_POINTS,
        actual: series.len(),
    })?;
    Ok(smooth_towards(last, last, alpha, horizon))
}

/// Apply the fixed-anchor recurrence `steps` times starting from `initial`.
pub fn smooth_towards(anchor: f64, initial: f64, alpha: f64, steps: u32) -> f64 {
    let mut forecast = initial;
    for _ in 0..steps {
        forecast = alpha * anchor + (1.0 - alpha) * forecast;
    }
    forecast
}
