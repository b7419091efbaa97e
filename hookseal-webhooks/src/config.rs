//! Configuration for the dispatcher

use hookseal_config::{DEFAULT_TIMEOUT_SECS, HookSettings};
use std::time::Duration;

/// Configuration for the webhook dispatcher
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Bound on the whole request, connect through body read
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,

    /// Whether to verify TLS certificates
    pub verify_tls: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("hookseal/{}", env!("CARGO_PKG_VERSION")),
            verify_tls: true,
        }
    }
}

impl DispatcherConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> DispatcherConfigBuilder {
        DispatcherConfigBuilder::new()
    }

    /// Take the HTTP settings from loaded settings
    pub fn from_settings(settings: &HookSettings) -> Self {
        Self {
            timeout: settings.timeout(),
            user_agent: settings.user_agent.clone(),
            verify_tls: settings.verify_tls,
        }
    }
}

/// Builder for DispatcherConfig
#[derive(Debug, Clone, Default)]
pub struct DispatcherConfigBuilder {
    config: DispatcherConfig,
}

impl DispatcherConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: DispatcherConfig::default(),
        }
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set TLS verification
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Build the configuration
    pub fn build(self) -> DispatcherConfig {
        self.config
    }
}
