//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_FILENAME;
use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is stored (default: "addressbook.json")
    pub data_file: PathBuf,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Path of the data file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_FILENAME),
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config {
            data_file,
            log_level,
        })
    }

    /// Parse an environment variable as a log level with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_FILENAME),
            log_level: "error".to_string(),
        }
    }
}
