//! Client configuration.
//!
//! Settings live in `~/.config/fsadmin/config.toml` by default:
//!
//! ```toml
//! debug_trace = false
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```
//!
//! Setting `FSADMIN_DEBUG_TRACE` to a true value (`1`, `t`, `true`, ...)
//! turns on command tracing regardless of the file.

use std::path::{Path, PathBuf};

use fsadmin_core::{TracingConfig, TracingOutputFormat, parse_level};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable that forces command tracing on.
pub const DEBUG_TRACE_ENV: &str = "FSADMIN_DEBUG_TRACE";

/// Configuration for the admin client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Log every command and response through a
    /// [`TracingCommander`](crate::TracingCommander).
    pub debug_trace: bool,

    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging settings, turned into a [`TracingConfig`] by
/// [`AdminConfig::tracing_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level: trace, debug, info, warn or error.
    pub level: String,

    /// Output format.
    pub format: TracingOutputFormat,

    /// Include file and line in log lines.
    pub include_location: bool,

    /// Explicit filter directive, overriding `level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: TracingOutputFormat::Pretty,
            include_location: false,
            filter: None,
        }
    }
}

impl AdminConfig {
    /// Loads configuration from the default path, or defaults if the file
    /// does not exist.
    pub fn load() -> ConfigResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fsadmin")
    }

    /// Returns true if command tracing is enabled by the file or by
    /// [`DEBUG_TRACE_ENV`].
    pub fn debug_trace_enabled(&self) -> bool {
        self.debug_trace_with(std::env::var(DEBUG_TRACE_ENV).ok().as_deref())
    }

    fn debug_trace_with(&self, env_value: Option<&str>) -> bool {
        self.debug_trace || env_value.and_then(parse_bool).unwrap_or(false)
    }

    /// Builds the tracing configuration described by the logging section.
    pub fn tracing_config(&self) -> ConfigResult<TracingConfig> {
        let level = parse_level(&self.logging.level)?;
        let mut config = TracingConfig::default()
            .with_level(level)
            .with_format(self.logging.format)
            .with_location(self.logging.include_location);
        if let Some(ref filter) = self.logging.filter {
            config = config.with_env_filter(filter.clone());
        }
        Ok(config)
    }
}

/// Parses a boolean the way command-line switches are usually spelled.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts; anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
