//! Genlab CLI — error types.

use genlab_core::GenError;
use thiserror::Error;

/// Startup and runtime errors for the demo runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A demo generator was built from invalid arguments.
    #[error("generator error: {0}")]
    Generator(#[from] GenError),

    /// The report could not be serialised.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
