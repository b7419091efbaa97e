// Compact token type

use crate::{JwtError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compact three-segment token: `header.payload.signature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    pub(crate) fn from_segments(header: &str, payload: &str, signature: &str) -> Self {
        Self(format!("{}.{}.{}", header, payload, signature))
    }

    /// The compact token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into (header, payload, signature) segments
    pub fn segments(&self) -> (&str, &str, &str) {
        let mut parts = self.0.splitn(3, '.');
        let header = parts.next().unwrap_or_default();
        let payload = parts.next().unwrap_or_default();
        let signature = parts.next().unwrap_or_default();
        (header, payload, signature)
    }

    /// The part covered by the signature
    pub fn signing_input(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Token {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.len() != 3 {
            return Err(JwtError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(JwtError::MalformedToken("empty segment".to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Token {
    type Error = JwtError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
