//! File logging for the binaries.
//!
//! The renderer owns stdout while the game runs, so logs only go to a file,
//! and only when one is configured. The filter comes from `RUST_LOG`
//! (default `info`).

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`; no-op when `path` is `None`.
///
/// Returns whether logging was enabled.
pub fn init(path: Option<&str>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {}", e))?;

    Ok(true)
}
