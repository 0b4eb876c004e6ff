//! Binary configuration, read from the environment.
//!
//! Configure the game using environment variables:
//!
//! - `SNAKE_WIDTH`: Board width in cells (default: 30)
//! - `SNAKE_HEIGHT`: Board height in cells (default: 20)
//! - `SNAKE_START_LEN`: Initial snake length (default: 5)
//! - `SNAKE_WRAP`: Set to "1" or "true" to wrap around board edges
//! - `SNAKE_TICK_MS`: Milliseconds per tick (default: 100)
//! - `SNAKE_SEED`: RNG seed (default: derived from the clock)
//! - `SNAKE_LOG_PATH`: Write `tracing` logs to this file (default: no logging)
//!
//! Unparseable values fall back to the default; a combination the game cannot
//! start with (for example a snake longer than its row) is an error.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::types::{GameConfig, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub tick_ms: u32,
    pub seed: u32,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: TICK_MS,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (the environment in production)
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = GameConfig::default();

        let game = GameConfig {
            width: parse_var(&var, "SNAKE_WIDTH").unwrap_or(defaults.width),
            height: parse_var(&var, "SNAKE_HEIGHT").unwrap_or(defaults.height),
            initial_length: parse_var(&var, "SNAKE_START_LEN").unwrap_or(defaults.initial_length),
            wrap: var("SNAKE_WRAP")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(defaults.wrap),
            ..defaults
        };

        ensure!(
            game.is_valid(),
            "invalid board: {}x{} cannot start a snake of length {}",
            game.width,
            game.height,
            game.initial_length
        );

        let tick_ms: u32 = parse_var(&var, "SNAKE_TICK_MS").unwrap_or(TICK_MS);
        ensure!(tick_ms > 0, "SNAKE_TICK_MS must be positive");

        let seed = parse_var(&var, "SNAKE_SEED").unwrap_or_else(clock_seed);

        let log_path = var("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Ok(Self {
            game,
            tick_ms,
            seed,
            log_path,
        })
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
