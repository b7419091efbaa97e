// Environment variable loading

use crate::{ConfigError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Default prefix for hookseal environment variables
pub const DEFAULT_PREFIX: &str = "HOOKSEAL";

/// Maps `PREFIX_*` variables onto settings keys.
///
/// `HOOKSEAL_SECRET` -> `secret`, `HOOKSEAL_CLIENT_ADD_URL` ->
/// `endpoints.client_add`, `HOOKSEAL_TIMEOUT_SECS` -> `timeout_secs`.
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a loader for the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Read matching variables from the process environment
    pub fn load(&self) -> Map<String, Value> {
        self.load_from(env::vars())
    }

    /// Read matching variables from a `.env` file without touching the
    /// process environment
    pub fn load_dotenv(&self, path: impl AsRef<Path>) -> Result<Map<String, Value>> {
        let iter =
            dotenvy::from_path_iter(path.as_ref()).map_err(|e| ConfigError::LoadError(e.to_string()))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::ParseError(e.to_string()))?;
            vars.insert(key, value);
        }

        Ok(self.load_from(vars))
    }

    /// Map an arbitrary set of variables
    pub fn load_from<I, K, V>(&self, vars: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Map::new();
        let mut endpoints = Map::new();
        let prefix = format!("{}_", self.prefix);

        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(&prefix) else {
                continue;
            };
            let value = value.into();

            match name {
                "SECRET" => {
                    settings.insert("secret".to_string(), Value::String(value));
                }
                "CLIENT_ADD_URL" => {
                    endpoints.insert("client_add".to_string(), Value::String(value));
                }
                "CLIENT_EDIT_URL" => {
                    endpoints.insert("client_edit".to_string(), Value::String(value));
                }
                "CLIENT_DELETE_URL" => {
                    endpoints.insert("client_delete".to_string(), Value::String(value));
                }
                "TIMEOUT_SECS" => {
                    settings.insert("timeout_secs".to_string(), number(&value));
                }
                "USER_AGENT" => {
                    settings.insert("user_agent".to_string(), Value::String(value));
                }
                "VERIFY_TLS" => {
                    settings.insert("verify_tls".to_string(), flag(&value));
                }
                _ => {}
            }
        }

        if !endpoints.is_empty() {
            settings.insert("endpoints".to_string(), Value::Object(endpoints));
        }

        settings
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Environment values are strings; numbers and booleans are converted so
/// they deserialize into typed settings fields.
fn number(value: &str) -> Value {
    match value.trim().parse::<u64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(value.to_string()),
    }
}

fn flag(value: &str) -> Value {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Value::Bool(true),
        "false" | "0" | "no" => Value::Bool(false),
        _ => Value::String(value.to_string()),
    }
}
