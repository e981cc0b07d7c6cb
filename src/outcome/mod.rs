// src/outcome/mod.rs
use crate::health::{CheckError, HealthReport};
use std::process::ExitCode;

pub const SUCCESS_MESSAGE: &str = "OK: deployed health check passed";

/// Result of one smoke-check run, as reported at the process boundary.
#[derive(Debug)]
pub enum ExitOutcome {
    Passed(HealthReport),
    Failed(CheckError),
}

impl ExitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Passed(_))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ExitOutcome::Passed(_) => 0,
            ExitOutcome::Failed(_) => 1,
        }
    }

    /// Text printed to stdout for this outcome.
    pub fn message(&self) -> String {
        match self {
            ExitOutcome::Passed(_) => SUCCESS_MESSAGE.to_string(),
            ExitOutcome::Failed(err) => format!("ERROR: {err}"),
        }
    }

    pub fn error(&self) -> Option<&CheckError> {
        match self {
            ExitOutcome::Passed(_) => None,
            ExitOutcome::Failed(err) => Some(err),
        }
    }
}

impl From<Result<HealthReport, CheckError>> for ExitOutcome {
    fn from(result: Result<HealthReport, CheckError>) -> Self {
        match result {
            Ok(report) => ExitOutcome::Passed(report),
            Err(err) => ExitOutcome::Failed(err),
        }
    }
}

impl From<&ExitOutcome> for ExitCode {
    fn from(outcome: &ExitOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}
