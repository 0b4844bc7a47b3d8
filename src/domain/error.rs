//! Domain error types

use thiserror::Error;

/// Unrecognized extraction mode name.
#[derive(Debug, Clone, Error)]
#[error(
    "unknown extraction mode \"{input}\" (expected summary, key-points, action-items, or sentiment)"
)]
pub struct InvalidModeError {
    pub input: String,
}

/// Configuration file failures.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    ReadError(String),

    #[error("could not parse config file: {0}")]
    ParseError(String),

    #[error("could not write config file: {0}")]
    WriteError(String),

    #[error("invalid value for config key '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("config file already exists at {0}")]
    AlreadyExists(String),
}
