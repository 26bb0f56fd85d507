//! Runner configuration read from the environment.

use std::fmt::Display;
use std::str::FromStr;

use genlab_core::Rng;
use serde::Serialize;

use crate::error::AppError;

const DEFAULT_SEED: i64 = 42;
const DEFAULT_SAMPLES: usize = 10;
const DEFAULT_PASSWORD_LENGTH: usize = 14;

/// Which source variant the demo draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Linear-congruential source seeded with `GENLAB_SEED`.
    Lcg,
    /// Linear-congruential source seeded from the system clock.
    Clock,
    /// CSPRNG-backed source.
    Secure,
    /// Counts up from 1.
    Incrementing,
}

impl SourceKind {
    /// Creates a fresh source state of this kind.
    pub fn build(self, seed: i64) -> Rng {
        match self {
            Self::Lcg => Rng::simple(seed),
            Self::Clock => Rng::from_system_clock(),
            Self::Secure => Rng::secure(),
            Self::Incrementing => Rng::incrementing(),
        }
    }
}

impl FromStr for SourceKind {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "lcg" => Ok(Self::Lcg),
            "clock" => Ok(Self::Clock),
            "secure" => Ok(Self::Secure),
            "incrementing" => Ok(Self::Incrementing),
            other => Err(AppError::Config(format!(
                "GENLAB_SOURCE must be one of lcg, clock, secure, incrementing; got {other:?}"
            ))),
        }
    }
}

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source variant to draw from.
    pub source: SourceKind,
    /// Seed for the `lcg` source; ignored by the others.
    pub seed: i64,
    /// Number of samples per report section.
    pub samples: usize,
    /// Length of each generated password.
    pub password_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::Lcg,
            seed: DEFAULT_SEED,
            samples: DEFAULT_SAMPLES,
            password_length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for absent keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let source = match lookup("GENLAB_SOURCE") {
            Some(raw) => raw.parse()?,
            None => defaults.source,
        };
        let seed = parse_or(&lookup, "GENLAB_SEED", defaults.seed)?;
        let samples = parse_or(&lookup, "GENLAB_SAMPLES", defaults.samples)?;
        if samples == 0 {
            return Err(AppError::Config(
                "GENLAB_SAMPLES must be greater than zero".to_owned(),
            ));
        }
        let password_length =
            parse_or(&lookup, "GENLAB_PASSWORD_LENGTH", defaults.password_length)?;

        Ok(Self {
            source,
            seed,
            samples,
            password_length,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid ({raw:?}): {e}"))),
        None => Ok(default),
    }
}
