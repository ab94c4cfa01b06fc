//! Configuration management for morning greetings.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present. Command line
//! flags override these values in `main`.

use crate::error::{ConfigError, ConfigResult};
use crate::import::readers::csv_reader::DEFAULT_DELIMITER;
use crate::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// Configuration for a morning greetings run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Console and file logging settings
    pub logging: LoggingConfig,

    /// CSV field delimiter (default: ',')
    pub csv_delimiter: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MORNING_GREETINGS_LOG_FILE`: Log file path (default: "morning_greetings.log")
    /// - `MORNING_GREETINGS_LOG_MAX_BYTES`: Rotation size in bytes (default: 3000000)
    /// - `MORNING_GREETINGS_LOG_BACKUPS`: Rotated files to keep (default: 3)
    /// - `MORNING_GREETINGS_CONSOLE_LEVEL`: Console log level (default: "info")
    /// - `MORNING_GREETINGS_FILE_LEVEL`: File log level (default: "debug")
    /// - `MORNING_GREETINGS_CSV_DELIMITER`: CSV delimiter character (default: ",")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = LoggingConfig::default();

        let file_path = env::var("MORNING_GREETINGS_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.file_path);

        let file_max_bytes =
            Self::parse_env_u64("MORNING_GREETINGS_LOG_MAX_BYTES", defaults.file_max_bytes)?;
        if file_max_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MORNING_GREETINGS_LOG_MAX_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let backup_count =
            Self::parse_env_usize("MORNING_GREETINGS_LOG_BACKUPS", defaults.backup_count)?;
        let console_level =
            Self::parse_env_level("MORNING_GREETINGS_CONSOLE_LEVEL", defaults.console_level)?;
        let file_level = Self::parse_env_level("MORNING_GREETINGS_FILE_LEVEL", defaults.file_level)?;

        let csv_delimiter = match env::var("MORNING_GREETINGS_CSV_DELIMITER") {
            Ok(val) => parse_delimiter("MORNING_GREETINGS_CSV_DELIMITER", &val)?,
            Err(_) => DEFAULT_DELIMITER,
        };

        Ok(Config {
            logging: LoggingConfig {
                console_level,
                file_level,
                file_path,
                file_max_bytes,
                backup_count,
            },
            csv_delimiter,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a tracing level with a default value.
    fn parse_env_level(var_name: &str, default: Level) -> ConfigResult<Level> {
        match env::var(var_name) {
            Ok(val) => Level::from_str(val.trim()).map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!(
                    "Must be one of trace, debug, info, warn, error, got: {}",
                    val
                ),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig::default(),
            csv_delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Parse a single-character delimiter into the byte the CSV reader expects.
///
/// `name` identifies the setting in the error (env var or CLI flag).
pub fn parse_delimiter(name: &str, value: &str) -> ConfigResult<u8> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => delimiter_byte(name, c),
        _ => Err(ConfigError::InvalidValue {
            var: name.to_string(),
            reason: format!("Must be a single character, got: {:?}", value),
        }),
    }
}

/// Convert a delimiter character to a byte; only ASCII is accepted.
pub fn delimiter_byte(name: &str, c: char) -> ConfigResult<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| ConfigError::InvalidValue {
            var: name.to_string(),
            reason: format!("Must be an ASCII character, got: {:?}", c),
        })
}
