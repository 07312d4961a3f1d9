//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::{LogFormat, SalesConfig};

/// Installs the global tracing subscriber described by `config`.
///
/// An invalid filter directive falls back to `info`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &SalesConfig) -> Result<(), TryInitError> {
    let filter = log_filter(&config.log_level);

    let (json, plain) = match config.log_format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Plain => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init()
}

/// Parses `directives`, falling back to `info` when they are invalid.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}
