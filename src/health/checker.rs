// src/health/checker.rs
use super::status::HealthResponse;
use crate::config::Config;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Runs one end-to-end check against the configured URL.
pub struct HealthChecker {
    config: Config,
    client: Client,
}

/// What a passing check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: u16,
    pub elapsed: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{0} is not set")]
    Config(&'static str),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("non-2xx status: {status}\nBody: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON: {source}\nBody: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("ok=false\nBody: {body}")]
    Unhealthy { body: String },
}

impl CheckError {
    /// Raw response body, for the variants raised after a response arrived.
    pub fn body(&self) -> Option<&str> {
        match self {
            CheckError::Status { body, .. }
            | CheckError::Decode { body, .. }
            | CheckError::Unhealthy { body } => Some(body),
            CheckError::Config(_) | CheckError::Request(_) => None,
        }
    }
}

impl HealthChecker {
    pub fn new(config: Config) -> Result<Self, CheckError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CheckError::Request)?;

        Ok(Self { config, client })
    }

    pub async fn check(&self) -> Result<HealthReport, CheckError> {
        let start = Instant::now();
        let url = self.config.url.as_str();

        debug!(%url, timeout = ?self.config.timeout, "Sending health check request");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(%url, error = %e, "Health check request failed");
            CheckError::Request(e)
        })?;

        let status = response.status();
        // The body is read in full before the status is judged so that a
        // failing response can still be reported with its content.
        let bytes = response.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "Failed to read health check body");
            CheckError::Request(e)
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();
        debug!(%status, len = bytes.len(), "Received health check response");

        if !status.is_success() {
            warn!(%url, %status, "Health check returned non-2xx status");
            return Err(CheckError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let health = HealthResponse::parse(&bytes).map_err(|source| {
            warn!(%url, error = %source, "Health check body is not valid JSON");
            CheckError::Decode {
                source,
                body: body.clone(),
            }
        })?;

        if !health.ok {
            warn!(%url, "Service reported ok=false");
            return Err(CheckError::Unhealthy { body });
        }

        let elapsed = start.elapsed();
        info!(
            %url,
            %status,
            elapsed_ms = elapsed.as_millis() as u64,
            "Health check passed"
        );

        Ok(HealthReport {
            status: status.as_u16(),
            elapsed,
        })
    }
}
