//! Tracing setup for the binary.
//!
//! The terminal is owned by the renderer, so log lines go to a file. Without
//! `MATCH3_LOG_PATH` (or `--log`) no subscriber is installed and every
//! `tracing` call in the engine is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init_logging(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("log: open {} failed", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("log: bad filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("log: subscriber already set: {}", e))?;

    tracing::info!(path = %path.display(), filter = %config.log_filter, "logging started");
    Ok(true)
}
