//! Sign an arbitrary JSON payload with the configured secret.

use crate::error::CliResult;
use std::path::Path;

pub fn execute(payload: &str, config: Option<&Path>) -> CliResult<()> {
    let payload = super::read_json(payload)?;
    let settings = super::load_settings(config)?;

    let token = hookseal_jwt::sign(&payload, &settings.signing_secret()?)?;
    println!("{}", token);

    Ok(())
}
