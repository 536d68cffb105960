//! Core error types for studystats-core.
//!
//! The statistics functions never fail; everything here belongs to the
//! edges of the library: parsing raw observations, configuration, the HTTP
//! client and the table helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studystats-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A caller-supplied value is not a real number
    #[error("Invalid numeric input: '{input}' is not a real number")]
    InvalidNumericInput { input: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Table helper errors
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home or data directory could not be prepared
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// HTTP client errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Base URL could not be parsed
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Header name or value rejected by the HTTP stack
    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },

    /// Connection, DNS, TLS or timeout failure
    #[error("Network-level error during request to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}: {body}")]
    Status { url: String, status: u16, body: String },
}

/// Table helper errors.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    /// Selected column does not exist
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

impl ApiError {
    /// HTTP status code when the server answered, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
