//! Error types for webhook operations

use thiserror::Error;

/// Errors that can occur while setting up or performing a dispatch.
///
/// Missing identifiers and network failures are not errors: they are
/// reported as [`DeliveryResult`](crate::DeliveryResult) variants.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] hookseal_jwt::JwtError),

    /// Settings could not be loaded or are invalid
    #[error("Configuration error: {0}")]
    Config(#[from] hookseal_config::ConfigError),

    /// Payload serialization failed
    #[error("Payload error: {0}")]
    PayloadError(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::PayloadError(err.to_string())
    }
}
