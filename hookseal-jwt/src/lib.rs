// Compact signed tokens for hookseal webhook notifications
//
// Tokens use the JWT compact serialization with a fixed HS256 header:
// `base64url(header).base64url(payload).base64url(HMAC-SHA256(secret, header.payload))`.

pub mod error;
pub mod secret;
pub mod signer;
pub mod token;

pub use error::{JwtError, Result};
pub use secret::{RECOMMENDED_SECRET_LEN, SigningSecret};
pub use signer::{TokenHeader, TokenSigner, decode_segment, decode_unverified, encode_segment};
pub use token::Token;

/// Sign `payload` with `secret`
pub fn sign<T: serde::Serialize + ?Sized>(payload: &T, secret: &SigningSecret) -> Result<Token> {
    TokenSigner::new(secret.clone()).sign(payload)
}
