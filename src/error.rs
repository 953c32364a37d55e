//! Error types for orgfolders

use thiserror::Error;

/// Result type alias for orgfolders operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by the pagination engine.
///
/// Both variants abort the call before any page is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PagingError {
    /// The token is not valid base64, or does not decode to a non-negative integer.
    #[error("Invalid page token: {0}")]
    InvalidToken(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Data source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Folder data not found: {0}")]
    NotFound(String),

    #[error("Failed to parse folder data: {0}")]
    Parse(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `orgfolders org set <ORG_ID>` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
