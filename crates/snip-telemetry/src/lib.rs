//! Process-wide tracing setup shared by the snip binaries.

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::log::SetLoggerError;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] SetLoggerError),
    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Builds the env filter, preferring `RUST_LOG` over [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber and routes `log` records into it.
///
/// Can only succeed once per process.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    LogTracer::init()?;

    let registry = Registry::default().with(env_filter());
    match format {
        LogFormat::Text => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer()))?;
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(
                registry.with(fmt::layer().json().flatten_event(true)),
            )?;
        }
    }

    Ok(())
}
