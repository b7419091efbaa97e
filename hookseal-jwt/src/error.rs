// Error types for token signing and verification

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Unsupported token header: {0}")]
    UnsupportedHeader(String),

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Base64 decoding error: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JwtError>;
