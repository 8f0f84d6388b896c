//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Zero or non-numeric `FACTLENS_FETCH_TIMEOUT_SECS`.
    #[error("invalid fetch timeout '{value}': must be a positive number of seconds")]
    InvalidTimeout { value: String },

    /// A decision policy override was unparseable or out of range.
    #[error("invalid policy value '{value}' for {field}: {reason}")]
    InvalidPolicy {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("classifier model directory does not exist: {path}")]
    ClassifierPathNotFound { path: PathBuf },

    /// The classifier path must be a model directory, not a single file.
    #[error("classifier model path is not a directory: {path}")]
    ClassifierPathNotDirectory { path: PathBuf },
}
