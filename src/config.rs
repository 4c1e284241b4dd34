//! Configuration module for msgcat.

use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

use crate::{MsgcatError, Result};

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Pre-seed the catalog with the demo messages on startup.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
        }
    }
}

/// Display configuration for the Date/Time lines of a message.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Timezone for displaying dates (e.g., "Asia/Jerusalem", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// chrono format string for the Date line.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// chrono format string for the Time line.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/msgcat.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MsgcatError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MsgcatError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MSGCAT_LOG_LEVEL`: Override the log level
    /// - `MSGCAT_TIMEZONE`: Override the display timezone
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("MSGCAT_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(tz) = std::env::var("MSGCAT_TIMEZONE") {
            if !tz.is_empty() {
                self.display.timezone = tz;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the display timezone is not a known IANA name,
    /// or if a date/time format holds an unknown specifier.
    pub fn validate(&self) -> Result<()> {
        if self.display.timezone.parse::<Tz>().is_err() {
            return Err(MsgcatError::Config(format!(
                "unknown timezone: {}",
                self.display.timezone
            )));
        }
        for (field, format) in [
            ("date_format", &self.display.date_format),
            ("time_format", &self.display.time_format),
        ] {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(MsgcatError::Config(format!(
                    "invalid {field}: {format}"
                )));
            }
        }
        Ok(())
    }
}
