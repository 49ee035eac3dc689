//! Error types for the healthcheck engine

use thiserror::Error;

/// Result type alias for the healthcheck engine
pub type Result<T> = std::result::Result<T, HealthcheckError>;

/// Main error type for the healthcheck engine
#[derive(Error, Debug)]
pub enum HealthcheckError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Status code that cannot be sent on the wire
    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),

    /// A success or failure content handler returned an error
    #[error("Content handler error: {0}")]
    Handler(String),
}

impl HealthcheckError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a content handler error
    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }
}
