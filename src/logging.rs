//! Structured logging built on the `tracing` crate.

use crate::error::{HashMapError, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// The `GAMEHASH_LOG` environment variable overrides the configured level
/// and accepts full `EnvFilter` directives.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<()> {
    let filter = build_env_filter(config)?;
    let base_subscriber = Registry::default().with(filter);

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    match format {
        "json" => {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        "text" => {
            let use_color = config.map(|c| c.color).unwrap_or(true);
            base_subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(use_color)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        other => {
            return Err(HashMapError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            )));
        }
    }

    Ok(())
}

fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env("GAMEHASH_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    EnvFilter::try_new(level)
        .map_err(|e| HashMapError::Config(format!("Invalid log level '{}': {}", level, e)))
}
