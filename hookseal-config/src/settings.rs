// Webhook settings

use crate::{
    ConfigError, ConfigLoader, ConfigValidator, DEFAULT_PREFIX, EnvLoader, Result, Validate, merge,
};
use hookseal_jwt::SigningSecret;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("hookseal/{}", env!("CARGO_PKG_VERSION"))
}

fn default_verify_tls() -> bool {
    true
}

/// One target URL per client event. Unset kinds are not dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    #[serde(default)]
    pub client_add: Option<String>,
    #[serde(default)]
    pub client_edit: Option<String>,
    #[serde(default)]
    pub client_delete: Option<String>,
}

impl EndpointSettings {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("endpoints.client_add", self.client_add.as_deref()),
            ("endpoints.client_edit", self.client_edit.as_deref()),
            ("endpoints.client_delete", self.client_delete.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|url| (name, url)))
    }
}

/// Process-wide webhook settings, read-only after startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct HookSettings {
    /// Shared secret; must match the receiver's verification key
    #[serde(default)]
    pub secret: String,

    #[serde(default)]
    pub endpoints: EndpointSettings,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

impl HookSettings {
    /// Settings with the given secret and defaults elsewhere
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            endpoints: EndpointSettings::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            verify_tls: true,
        }
    }

    pub fn with_endpoints(mut self, endpoints: EndpointSettings) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Build and validate settings from merged key/value data
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        let settings: Self = serde_json::from_value(Value::Object(map))
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// The signing secret
    pub fn signing_secret(&self) -> Result<SigningSecret> {
        SigningSecret::new(self.secret.clone())
            .map_err(|e| ConfigError::ValidationError(format!("secret: {}", e)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for HookSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.secret, "secret")?;
        ConfigValidator::positive(self.timeout_secs, "timeout_secs")?;

        for (field, url) in self.endpoints.iter() {
            ConfigValidator::is_url(url, field)?;
        }

        if self.signing_secret()?.is_weak() {
            tracing::warn!(
                min_len = hookseal_jwt::RECOMMENDED_SECRET_LEN,
                "Signing secret is shorter than recommended"
            );
        }

        Ok(())
    }
}

impl fmt::Debug for HookSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSettings")
            .field("secret", &"***")
            .field("endpoints", &self.endpoints)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("verify_tls", &self.verify_tls)
            .finish()
    }
}

/// Loads [`HookSettings`] from a file, a `.env` file and the environment,
/// in that order; later sources win.
pub struct SettingsLoader {
    file: Option<PathBuf>,
    dotenv: Option<PathBuf>,
    env: Option<EnvLoader>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            file: None,
            dotenv: None,
            env: Some(EnvLoader::default()),
        }
    }

    /// Read a `.toml`, `.json` or `.env` settings file
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read a `.env` file
    pub fn dotenv(mut self, path: impl AsRef<Path>) -> Self {
        self.dotenv = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a different environment variable prefix
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env = Some(EnvLoader::new(prefix));
        self
    }

    /// Ignore the process environment
    pub fn without_env(mut self) -> Self {
        self.env = None;
        self
    }

    pub fn load(&self) -> Result<HookSettings> {
        let mut map = Map::new();

        if let Some(path) = &self.file {
            merge(&mut map, ConfigLoader::auto(path)?.load_file(path)?);
        }

        if let Some(path) = &self.dotenv {
            let prefix = self.env.as_ref().map_or(DEFAULT_PREFIX, EnvLoader::prefix);
            let loader = EnvLoader::new(prefix);
            merge(&mut map, loader.load_dotenv(path)?);
        }

        if let Some(env) = &self.env {
            merge(&mut map, env.load());
        }

        HookSettings::from_map(map)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = HookSettings::from_map(map(json!({"secret": "s"}))).unwrap();

        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert!(settings.verify_tls);
        assert!(settings.user_agent.starts_with("hookseal/"));
        assert_eq!(settings.endpoints, EndpointSettings::default());
    }

    #[test]
    fn test_missing_secret_rejected() {
        let result = HookSettings::from_map(Map::new());
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = HookSettings::from_map(map(json!({
            "secret": "s",
            "endpoints": {"client_add": "REPLACE_WITH_WEBHOOK_URL_HERE"}
        })));

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = HookSettings::from_map(map(json!({"secret": "s", "timeout_secs": 0})));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = HookSettings::new("very-secret-value");
        let debug = format!("{:?}", settings);

        assert!(!debug.contains("very-secret-value"));
        assert!(debug.contains("***"));
    }
}
