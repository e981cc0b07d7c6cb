// src/health/mod.rs
mod checker;
mod status;

pub use checker::{CheckError, HealthChecker, HealthReport};
pub use status::HealthResponse;
