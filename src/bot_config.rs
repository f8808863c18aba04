//! # Bot Configuration Module
//!
//! This module defines the configuration structure for the polling pipeline,
//! including timing parameters and environment resolution.

use anyhow::{Context, Result};
use std::env;

// Constants for polling configuration
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_ERROR_COOLDOWN_SECS: u64 = 2;
pub const DEFAULT_LONG_POLL_TIMEOUT_SECS: u64 = 30;

/// Configuration structure for the bot session
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Bot token from @BotFather
    pub bot_token: String,
    /// Fixed delay between poll iterations in milliseconds
    pub poll_interval_ms: u64,
    /// Cooldown after a failed fetch in seconds
    pub error_cooldown_secs: u64,
    /// Long-poll timeout passed to getUpdates in seconds
    pub long_poll_timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            error_cooldown_secs: DEFAULT_ERROR_COOLDOWN_SECS,
            long_poll_timeout_secs: DEFAULT_LONG_POLL_TIMEOUT_SECS,
        }
    }
}

impl BotConfig {
    /// Create a config for the given token with default timing
    pub fn new(bot_token: String) -> Self {
        Self {
            bot_token,
            ..Default::default()
        }
    }

    /// Resolve the configuration from the environment
    ///
    /// `TELEGRAM_BOT_TOKEN` is required; `POLL_INTERVAL_MS`,
    /// `ERROR_COOLDOWN_SECS` and `LONG_POLL_TIMEOUT_SECS` override the
    /// defaults when set to a valid integer.
    pub fn from_env() -> Result<Self> {
        let bot_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

        Ok(Self {
            bot_token,
            poll_interval_ms: env_u64("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS),
            error_cooldown_secs: env_u64("ERROR_COOLDOWN_SECS", DEFAULT_ERROR_COOLDOWN_SECS),
            long_poll_timeout_secs: env_u64(
                "LONG_POLL_TIMEOUT_SECS",
                DEFAULT_LONG_POLL_TIMEOUT_SECS,
            ),
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
