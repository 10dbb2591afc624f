//! Engine-wide constants.

/// Horizons strictly greater than this switch EWMA to linear regression.
pub const EWMA_MAX_HORIZON_WEEKS: u32 = 3;

/// Number of most recent weeks averaged to estimate the severity mix.
pub const RECENT_MIX_WEEKS: usize = 10;

/// Minimum series length for an EWMA projection.
pub const EWMA_MIN_POINTS: usize = 1;

/// Minimum series length for a least-squares line fit.
pub const LINREG_MIN_POINTS: usize = 2;

/// Default resolution time assigned to weeks without any closures.
pub const DEFAULT_RESOLUTION_HOURS: f64 = 36.0;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "DEFECT_LOG";
