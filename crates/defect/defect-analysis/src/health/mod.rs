//! Rolling-window health classification.

pub mod classifier;
pub mod window;

pub use classifier::{assign_status, HealthClassifier};
pub use window::{RollingSum, Streak};
