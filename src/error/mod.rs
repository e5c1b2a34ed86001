//! Error types for Skycast.

use thiserror::Error;

/// Primary error type for all Skycast operations.
#[derive(Error, Debug)]
pub enum SkycastError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl SkycastError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error originated upstream (network, HTTP, payload shape)
    /// rather than from local misconfiguration.
    pub fn is_upstream(&self) -> bool {
        !matches!(
            self,
            Self::Configuration(_) | Self::Authentication(_) | Self::Io(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkycastError>;
