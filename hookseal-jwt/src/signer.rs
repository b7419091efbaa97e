// HS256 token signer

use crate::{JwtError, Result, SigningSecret, Token};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Fixed token header. Serializes to `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl TokenHeader {
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Signs payloads into compact HS256 tokens.
///
/// Signing is deterministic: the same payload bytes and secret always yield
/// the same token. No timestamp, expiry or nonce is added.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    secret: SigningSecret,
}

impl TokenSigner {
    /// Create a signer for the given secret
    pub fn new(secret: SigningSecret) -> Self {
        Self { secret }
    }

    /// Sign a payload
    ///
    /// The payload is serialized with `serde_json`; field order follows the
    /// `Serialize` implementation and determines the signed bytes.
    pub fn sign<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Token> {
        let header = encode_segment(&serde_json::to_vec(&TokenHeader::hs256())?);
        let body = encode_segment(&serde_json::to_vec(payload)?);

        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(body.as_bytes());
        let signature = encode_segment(&mac.finalize().into_bytes());

        Ok(Token::from_segments(&header, &body, &signature))
    }

    /// Verify a token and return its decoded payload
    pub fn verify(&self, token: &str) -> Result<serde_json::Value> {
        let token: Token = token.parse()?;
        let (header, body, signature) = token.segments();

        let decoded_header: TokenHeader = serde_json::from_slice(&decode_segment(header)?)
            .map_err(|e| JwtError::UnsupportedHeader(e.to_string()))?;
        if decoded_header != TokenHeader::hs256() {
            return Err(JwtError::UnsupportedHeader(format!(
                "alg={}, typ={}",
                decoded_header.alg, decoded_header.typ
            )));
        }

        let signature = decode_segment(signature)?;
        let mut mac = self.mac()?;
        mac.update(token.signing_input().as_bytes());
        // Constant-time comparison
        mac.verify_slice(&signature)
            .map_err(|_| JwtError::InvalidSignature)?;

        Ok(serde_json::from_slice(&decode_segment(body)?)?)
    }

    /// The configured secret
    pub fn secret(&self) -> &SigningSecret {
        &self.secret
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| JwtError::InvalidKey(e.to_string()))
    }
}

/// Decode the payload segment without checking the signature
pub fn decode_unverified(token: &str) -> Result<serde_json::Value> {
    let token: Token = token.parse()?;
    let (_, body, _) = token.segments();
    Ok(serde_json::from_slice(&decode_segment(body)?)?)
}

/// base64url without padding
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}
