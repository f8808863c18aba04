//! # Bot Error Types Module
//!
//! This module defines the error taxonomy used throughout the polling pipeline.
//! Variants separate fatal startup failures from recoverable and advisory ones,
//! so callers can assert suppression instead of relying on catch-and-log.

/// Custom error types for bot operations
#[derive(Debug, Clone)]
pub enum BotError {
    /// Identity verification failed at startup; fatal, the loop never starts
    Credential(String),
    /// Network or parse failure contacting the remote API; recovered in-loop
    Transport(String),
    /// Advisory failure (e.g. a delete without permission); logged and suppressed
    Action(String),
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::Credential(msg) => write!(f, "Credential error: {msg}"),
            BotError::Transport(msg) => write!(f, "Transport error: {msg}"),
            BotError::Action(msg) => write!(f, "Action error: {msg}"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}
