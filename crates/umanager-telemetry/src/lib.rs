//! Tracing setup shared by the umanager binaries.

use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable, multi-line output.
    #[default]
    #[value(name = "pretty")]
    Pretty,
    /// One JSON object per event.
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Builds the event filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(DEFAULT_FILTER)?),
    }
}

/// Installs the global tracing subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()?);

    match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    }
    .map_err(|e| TelemetryError::Install(e.to_string()))
}
