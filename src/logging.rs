//! Debug logging
//!
//! The terminal belongs to the dashboard, so diagnostics go to a file in the
//! temp directory and only when `--debug` is passed.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::utils;

/// Install the tracing subscriber. No-op unless `debug` is set.
pub fn init(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log at {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("factdash=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::debug!("Debug logging to {}", path.display());
    Ok(())
}
