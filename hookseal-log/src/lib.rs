//! hookseal logging setup
//!
//! Installs a `tracing` subscriber configured from the environment. All
//! hookseal crates emit diagnostics through `tracing`; this crate only
//! decides where they go and at what level.
//!
//! # Environment Variables
//!
//! - `HOOKSEAL_DEBUG=1` - Enable debug logging
//! - `HOOKSEAL_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `HOOKSEAL_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `RUST_LOG` - Standard filter directives, takes precedence over the level
//!
//! # Usage
//!
//! ```rust
//! hookseal_log::init();
//! tracing::info!("ready");
//! ```

use once_cell::sync::OnceCell;
use std::env;
use tracing_subscriber::{EnvFilter, fmt};

// ============================================================================
// Log Levels
// ============================================================================

/// Log level for hookseal logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level (least verbose)
    Error = 4,
    /// Off (no logging)
    Off = 5,
}

impl Level {
    /// Parse a level name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable format
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON format for structured logging
    Json,
}

impl Format {
    /// Parse a format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether to emit ANSI colors
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false, // JSON output doesn't use colors
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };

        let debug = flag("HOOKSEAL_DEBUG").unwrap_or(false);

        let level = lookup("HOOKSEAL_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("HOOKSEAL_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Json);

        let color = flag("HOOKSEAL_LOG_COLOR")
            .unwrap_or(format != Format::Json && lookup("NO_COLOR").is_none());

        Self {
            debug,
            level,
            format,
            color,
        }
    }

    /// Filter honoring `RUST_LOG` before the configured level.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

// ============================================================================
// Public API
// ============================================================================

static INSTALLED: OnceCell<LogConfig> = OnceCell::new();

/// Install the global subscriber using [`LogConfig::from_env`].
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() -> &'static LogConfig {
    init_with(LogConfig::from_env())
}

/// Install the global subscriber with an explicit configuration.
pub fn init_with(config: LogConfig) -> &'static LogConfig {
    INSTALLED.get_or_init(|| {
        let builder = fmt()
            .with_env_filter(config.filter())
            .with_writer(std::io::stderr)
            .with_ansi(config.color);

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = match config.format {
            Format::Json => builder.json().try_init(),
            Format::Pretty => builder.pretty().try_init(),
            Format::Compact => builder.compact().try_init(),
        };

        config
    })
}

/// The configuration installed by [`init`], if any.
pub fn config() -> Option<&'static LogConfig> {
    INSTALLED.get()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> LogConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("debug"), Some(Level::Debug));
        assert_eq!(Level::parse("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("invalid"), None);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::parse("pretty"), Some(Format::Pretty));
        assert_eq!(Format::parse("compact"), Some(Format::Compact));
        assert_eq!(Format::parse("json"), Some(Format::Json));
        assert_eq!(Format::parse("invalid"), None);
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_debug_flag_lowers_level() {
        let config = config_from(&[("HOOKSEAL_DEBUG", "1")]);
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);
    }

    #[test]
    fn test_explicit_level_wins() {
        let config = config_from(&[("HOOKSEAL_DEBUG", "true"), ("HOOKSEAL_LOG_LEVEL", "warn")]);
        assert_eq!(config.level, Level::Warn);
    }

    #[test]
    fn test_pretty_format_enables_color() {
        let config = config_from(&[("HOOKSEAL_LOG_FORMAT", "pretty")]);
        assert_eq!(config.format, Format::Pretty);
        assert!(config.color);

        let config = config_from(&[("HOOKSEAL_LOG_FORMAT", "pretty"), ("NO_COLOR", "1")]);
        assert!(!config.color);
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init_with(LogConfig::default());
        let second = init();
        assert!(std::ptr::eq(first, second));
    }
}
