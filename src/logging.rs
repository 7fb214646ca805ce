//! Structured logging setup for the `swaggerize` binary
//!
//! The library only emits `tracing` events. Installing a subscriber is left to
//! the binary (or to whatever generator embeds the crate).
//!
//! ## Environment Variables
//!
//! - `SWAGGERIZE_LOG_LEVEL` - `trace`/`debug`/`info`/`warn`/`error` (default `info`).
//!   `RUST_LOG` wins when set.
//! - `SWAGGERIZE_LOG_FORMAT` - `pretty` (default) or `json`
//! - `SWAGGERIZE_LOG_INCLUDE_LOCATION` - `true` to add file:line to each event

use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Log format: pretty for terminals, JSON for machine consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Include file:line location
    pub include_location: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("SWAGGERIZE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("SWAGGERIZE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            include_location: env::var("SWAGGERIZE_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::try_from_default_env().map_err(|e| anyhow!("invalid RUST_LOG: {e}"));
    }
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| anyhow!("invalid log level '{}': {e}", config.log_level))
}

/// Install the global subscriber, writing to stderr
///
/// # Errors
///
/// Fails on an unparsable level/filter or when a global subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
