//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Errors from installing the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` wins, then the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.level.trim()).map_err(|source| {
            TelemetryError::EnvFilter {
                value: config.level.clone(),
                source,
            }
        }),
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout is left to command output.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(TelemetryError::Subscriber),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(TelemetryError::Subscriber),
    }
}
