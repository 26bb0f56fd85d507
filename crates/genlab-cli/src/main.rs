//! Genlab demo runner entry point.

use std::error::Error;

use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod report;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting genlab demo runner");

    let config = config::Config::from_env()?;
    tracing::info!(source = ?config.source, seed = config.seed, "configuration loaded");

    let rng = config.source.build(config.seed);
    let report = report::build_report(&config, rng)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).map_err(error::AppError::from)?
    );

    Ok(())
}
