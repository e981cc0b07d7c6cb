// src/main.rs
use anyhow::{anyhow, Result};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only the outcome message.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    let outcome = deploy_smokecheck::run().await;
    println!("{}", outcome.message());

    Ok(ExitCode::from(&outcome))
}
