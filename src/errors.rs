//! Shared error types used across submodules.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum OhmLabError {
    /// Wraps configuration loading and validation errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Raised when a control receives a NaN or infinite value.
    #[error("{control} must be a finite number, got {value}")]
    NonFiniteInput {
        /// Name of the control that rejected the value.
        control: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Raised when an interactive command cannot be parsed.
    #[error("unrecognised input: {0}")]
    UnknownInput(String),
    /// Raised when writing an export fails.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
    /// Raised when JSON serialization of a snapshot fails.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
