//! Environment variable handling for configuration overrides.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the base directory.
pub const ENV_BASE_DIR: &str = "PATHSET_BASE_DIR";
/// Enables or disables tilde expansion.
pub const ENV_EXPAND_TILDE: &str = "PATHSET_EXPAND_TILDE";
/// Enables or disables `file:` URI tokens.
pub const ENV_ALLOW_FILE_URIS: &str = "PATHSET_ALLOW_FILE_URIS";
/// Comma-separated script extensions.
pub const ENV_SCRIPT_EXTENSIONS: &str = "PATHSET_SCRIPT_EXTENSIONS";
/// Overrides the display name.
pub const ENV_DISPLAY_NAME: &str = "PATHSET_DISPLAY_NAME";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathset::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHSET_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = env::var_os(ENV_BASE_DIR) {
            config.base_dir = Some(PathBuf::from(dir));
        }

        if let Ok(val) = env::var(ENV_EXPAND_TILDE) {
            config.expand_tilde = Some(Self::parse_bool(ENV_EXPAND_TILDE, &val)?);
        }

        if let Ok(val) = env::var(ENV_ALLOW_FILE_URIS) {
            config.allow_file_uris = Some(Self::parse_bool(ENV_ALLOW_FILE_URIS, &val)?);
        }

        if let Ok(val) = env::var(ENV_SCRIPT_EXTENSIONS) {
            config.script_extensions = Some(Self::parse_list(&val));
        }

        if let Ok(name) = env::var(ENV_DISPLAY_NAME) {
            config.display_name = Some(name);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, dropping blank entries.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
