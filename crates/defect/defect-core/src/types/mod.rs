pub mod forecast;
pub mod health;
pub mod measures;
pub mod severity;
