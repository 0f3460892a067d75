//! Configuration for the validation rules
//!
//! Every section falls back to its defaults, and the defaults reproduce the
//! fixed behaviour of the free functions (`is_secure`, `is_valid_isbn10`, ...).
//! A configuration only matters for code that builds its checks from it,
//! such as [`Validator::new`](crate::validators::Validator::new).
//!
//! # Example
//! ```toml
//! [password]
//! min_length = 12
//! min_distinct = 8
//! require_special = false
//!
//! [isbn]
//! lowercase_check_digit = true
//! ```

use crate::isbn::IsbnRules;
use crate::security::PasswordPolicy;
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use std::fs;
#[cfg(feature = "config")]
use std::path::Path;

/// Validation settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Password strength policy
    pub password: PasswordPolicy,
    /// ISBN acceptance rules
    pub isbn: IsbnRules,
}

#[cfg(feature = "config")]
impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}. Make sure the file exists and is readable.",
                path_ref.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}. Check TOML syntax.",
                path_ref.display(),
                e
            ))
        })?;

        log::debug!(
            "Successfully loaded configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }
}
