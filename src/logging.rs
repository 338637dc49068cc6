// src/logging.rs
//! Log subscriber setup for the binary. Library code only emits `tracing` events.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber. `RUST_LOG` takes precedence over `level`.
///
/// # Errors
/// Returns error if `level` is not a valid filter or a subscriber is already set.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("Invalid log level '{level}': {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}
