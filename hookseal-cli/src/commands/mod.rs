//! CLI command implementations.

pub mod config;
pub mod dispatch;
pub mod sign;
pub mod verify;

use crate::error::{CliError, CliResult};
use hookseal_config::{HookSettings, SettingsLoader};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load settings from the optional file, then the environment.
pub fn load_settings(config: Option<&Path>) -> CliResult<HookSettings> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = config {
        loader = loader.file(path);
    }
    Ok(loader.load()?)
}

/// Parse a JSON argument; `@path` reads the JSON from a file.
pub fn read_json(arg: &str) -> CliResult<Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)?,
        None => arg.to_string(),
    };
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_read_inline_json() {
        assert_eq!(read_json(r#"{"userid": 7}"#).unwrap(), json!({"userid": 7}));
    }

    #[test]
    fn test_read_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"client_id": 42}}"#).unwrap();

        let arg = format!("@{}", file.path().display());
        assert_eq!(read_json(&arg).unwrap(), json!({"client_id": 42}));
    }

    #[test]
    fn test_read_json_errors() {
        assert!(matches!(read_json("{not json"), Err(CliError::InvalidArgument(_))));
        assert!(matches!(
            read_json("@/definitely/not/here.json"),
            Err(CliError::Io(_))
        ));
    }
}
