mod config_error;
mod flow_error;

pub use config_error::ConfigError;
pub use flow_error::{FlowError, FlowResult};
