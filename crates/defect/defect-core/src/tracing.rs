//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Install the global fmt subscriber.
///
/// The filter is read from `DEFECT_LOG` (same syntax as `RUST_LOG`) and falls
/// back to `info`. Output goes to stderr so stdout stays free for reports.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
