//! Error types for the access-control engine

use thiserror::Error;

/// Result type alias for the access-control engine
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the access-control engine
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Forbidden errors
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl AccessError {
    /// Returns true if this error is an authorization denial
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}
