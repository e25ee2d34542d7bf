//! Demo configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `FUNCOPS_LOG_FILE`: file the append demo writes to (default `info.log`)
//! - `FUNCOPS_LOG_PREFIX`: prefix of lines written to standard output
//!   (default `LOG: `)
//!
//! Unset variables fall back to their defaults; variables that are set but
//! empty are rejected.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Variable naming the append target.
pub const LOG_FILE_VAR: &str = "FUNCOPS_LOG_FILE";
/// Variable naming the stdout line prefix.
pub const LOG_PREFIX_VAR: &str = "FUNCOPS_LOG_PREFIX";

const DEFAULT_LOG_FILE: &str = "info.log";
const DEFAULT_LOG_PREFIX: &str = "LOG: ";

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// File appended to by the consumer demo.
    pub log_file: PathBuf,
    /// Prefix of lines printed by the consumer demo.
    pub log_prefix: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_prefix: DEFAULT_LOG_PREFIX.to_string(),
        }
    }
}

impl DemoConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` if a variable is set to an empty string
    /// and `ConfigError::NotUnicode` if it is not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        for key in [LOG_FILE_VAR, LOG_PREFIX_VAR] {
            if let Err(env::VarError::NotUnicode(_)) = env::var(key) {
                return Err(ConfigError::NotUnicode(key.to_string()));
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` if a variable is set to an empty string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcops::config::DemoConfig;
    ///
    /// let config = DemoConfig::from_lookup(|key| {
    ///     (key == "FUNCOPS_LOG_FILE").then(|| "/tmp/demo.log".to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.log_file.to_str(), Some("/tmp/demo.log"));
    /// assert_eq!(config.log_prefix, "LOG: ");
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_file = get_optional(&lookup, LOG_FILE_VAR)?.map_or(defaults.log_file, PathBuf::from);
        let log_prefix = get_optional(&lookup, LOG_PREFIX_VAR)?.unwrap_or(defaults.log_prefix);

        Ok(Self {
            log_file,
            log_prefix,
        })
    }
}

fn get_optional<L>(lookup: &L, key: &str) -> Result<Option<String>, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.is_empty() => Err(ConfigError::Empty(key.to_string())),
        other => Ok(other),
    }
}
