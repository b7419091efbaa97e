// Configuration management for hookseal
//
// The shared secret and one endpoint per event kind are loaded once at
// startup and treated as read-only afterwards.

pub mod env;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use env::{DEFAULT_PREFIX, EnvLoader};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat, merge};
pub use settings::{DEFAULT_TIMEOUT_SECS, EndpointSettings, HookSettings, SettingsLoader};
pub use validation::{ConfigValidator, Validate};
