// src/lib.rs
pub mod config;
pub mod health;
pub mod outcome;

use crate::{
    config::Config,
    health::{CheckError, HealthChecker},
    outcome::ExitOutcome,
};

/// Read `DEPLOYED_HEALTH_URL` and run a single health check against it.
pub async fn run() -> ExitOutcome {
    run_with(Config::from_env()).await
}

/// Run a single health check with an already-resolved configuration.
///
/// A configuration error short-circuits before any client is built.
pub async fn run_with(config: Result<Config, CheckError>) -> ExitOutcome {
    let result = match config.and_then(HealthChecker::new) {
        Ok(checker) => checker.check().await,
        Err(err) => Err(err),
    };
    ExitOutcome::from(result)
}
