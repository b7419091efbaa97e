// Shared signing secret

use crate::{JwtError, Result};
use std::fmt;
use std::str::FromStr;

/// Secrets shorter than this are accepted but considered weak.
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Shared secret used to sign tokens.
///
/// Must match the secret configured on the receiving side. The value is
/// never printed: `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    /// Create a secret, rejecting the empty string
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }
        Ok(Self(secret))
    }

    /// Raw key bytes for the MAC
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty secret cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the secret is shorter than [`RECOMMENDED_SECRET_LEN`]
    pub fn is_weak(&self) -> bool {
        self.0.chars().count() < RECOMMENDED_SECRET_LEN
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}

impl fmt::Display for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl FromStr for SigningSecret {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
