//! Outcome of a single webhook delivery

use crate::ValidationError;

/// Characters of the response body kept for logging
pub const BODY_SNIPPET_CHARS: usize = 200;

/// Result of one dispatch attempt. There are no retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    /// The endpoint answered. Any status code counts, including 4xx/5xx.
    Success {
        /// HTTP status code
        status: u16,
        /// First [`BODY_SNIPPET_CHARS`] characters of the response body
        body: String,
    },

    /// The request did not complete: timeout, DNS, refused connection, TLS
    TransportError(String),

    /// The record lacked its client id; no request was made
    ValidationError(ValidationError),
}

impl DeliveryResult {
    pub(crate) fn success(status: u16, body: &str) -> Self {
        Self::Success {
            status,
            body: snippet(body),
        }
    }

    /// Whether a request reached the endpoint and got an answer
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether the endpoint answered with a 2xx status
    pub fn is_2xx(&self) -> bool {
        matches!(self, Self::Success { status, .. } if (200..300).contains(status))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Success { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// First [`BODY_SNIPPET_CHARS`] characters of `body`
pub fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}
