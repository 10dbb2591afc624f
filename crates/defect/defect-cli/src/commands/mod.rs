pub mod aggregate;
pub mod analyze;
