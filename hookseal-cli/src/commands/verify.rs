//! Verify a token against the configured secret and print its payload.

use crate::error::CliResult;
use hookseal_jwt::TokenSigner;
use std::path::Path;

pub fn execute(token: &str, config: Option<&Path>) -> CliResult<()> {
    let settings = super::load_settings(config)?;
    let signer = TokenSigner::new(settings.signing_secret()?);

    let token = token.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    let payload = signer.verify(token)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
