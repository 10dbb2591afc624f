//! Staffing plans derived from severity-segmented forecasts.

pub mod resource_planner;

pub use resource_planner::ResourcePlanner;
