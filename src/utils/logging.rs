//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{AccessError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_ascii_lowercase()))
        .map_err(|e| AccessError::config(format!("Invalid log filter: {}", e)))?;

    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    }
    .map_err(|e| AccessError::config(format!("Failed to initialize logging: {}", e)))
}
