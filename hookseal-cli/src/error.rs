//! Error types for the hookseal CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// IO error (reading a record or payload file)
    Io(std::io::Error),

    /// Settings could not be loaded or failed validation
    Config(String),

    /// Malformed JSON or unknown event name
    InvalidArgument(String),

    /// Signing or verification failure
    Token(String),

    /// Webhook stack could not be built
    Dispatch(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Token(msg) => write!(f, "Token error: {}", msg),
            CliError::Dispatch(msg) => write!(f, "Dispatch error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<hookseal_config::ConfigError> for CliError {
    fn from(e: hookseal_config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<hookseal_jwt::JwtError> for CliError {
    fn from(e: hookseal_jwt::JwtError) -> Self {
        CliError::Token(e.to_string())
    }
}

impl From<hookseal_webhooks::WebhookError> for CliError {
    fn from(e: hookseal_webhooks::WebhookError) -> Self {
        CliError::Dispatch(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidArgument(format!("invalid JSON: {}", e))
    }
}
