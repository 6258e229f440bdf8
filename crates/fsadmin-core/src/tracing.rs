//! Tracing setup for fsadmin.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the embedding program, which can use [`init_tracing`] to get the
//! same filter and formatting conventions across all fsadmin crates.
//!
//! ```ignore
//! use fsadmin_core::tracing::{init_tracing, TracingConfig};
//!
//! // Show every command buffer and response exchanged with the cluster.
//! init_tracing(TracingConfig::command_trace())?;
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Crate targets covered by the default filter directive.
const TARGETS: [&str; 3] = ["fsadmin_core", "fsadmin_protocol", "fsadmin_client"];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Failed to parse env filter directive
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),

    /// Unknown log level name
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingOutputFormat {
    /// Human-readable multi-line format (default)
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON lines, for log collectors
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// The default log level when RUST_LOG is not set
    pub default_level: Level,
    /// Output format for log messages
    pub output_format: TracingOutputFormat,
    /// Whether to include file/line information in logs
    pub include_location: bool,
    /// Whether to include target (module path) in logs
    pub include_target: bool,
    /// Whether to include timestamps
    pub include_timestamp: bool,
    /// Whether to include span events (enter/exit)
    pub include_span_events: bool,
    /// Custom env filter directive (overrides default_level if set)
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Pretty,
            include_location: false,
            include_target: true,
            include_timestamp: true,
            include_span_events: false,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Debug-level compact output, suited to following command traffic.
    #[must_use]
    pub fn command_trace() -> Self {
        Self {
            default_level: Level::DEBUG,
            output_format: TracingOutputFormat::Compact,
            include_location: false,
            include_target: true,
            include_timestamp: false,
            include_span_events: false,
            env_filter: None,
        }
    }

    /// JSON output for programs shipping logs to a collector.
    #[must_use]
    pub fn structured() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Json,
            include_location: true,
            include_target: true,
            include_timestamp: true,
            include_span_events: true,
            env_filter: None,
        }
    }

    /// Set the default log level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set whether file/line information is included
    #[must_use]
    pub fn with_location(mut self, include: bool) -> Self {
        self.include_location = include;
        self
    }

    /// Set a custom env filter directive
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Returns the filter directive used when neither `env_filter` nor
    /// `RUST_LOG` is set.
    pub fn default_directive(&self) -> String {
        TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.default_level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parses a level name such as `"debug"` or `"WARN"`.
pub fn parse_level(name: &str) -> Result<Level, TracingError> {
    Level::from_str(name.trim()).map_err(|_| TracingError::InvalidLevel(name.to_string()))
}

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over `default_level`; an explicit
/// `env_filter` takes precedence over both.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set or if
/// the env filter directive is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = if let Some(ref filter) = config.env_filter {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.default_directive()))
    };

    let span_events = if config.include_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    match config.output_format {
        TracingOutputFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .pretty()
                    .with_file(config.include_location)
                    .with_line_number(config.include_location)
                    .with_target(config.include_target)
                    .with_span_events(span_events),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        TracingOutputFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_target(config.include_target)
                .with_span_events(span_events);

            let layer = if config.include_timestamp {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            };

            let subscriber = tracing_subscriber::registry().with(env_filter).with(layer);
            tracing::subscriber::set_global_default(subscriber)?;
        }
        TracingOutputFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                fmt::layer()
                    .json()
                    .with_file(config.include_location)
                    .with_line_number(config.include_location)
                    .with_target(config.include_target)
                    .with_span_events(span_events),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}
