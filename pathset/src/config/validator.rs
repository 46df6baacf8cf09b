//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use pathset::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
///
/// let bad = Config { script_extensions: Some(vec!["gradle".into()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base_dir) = config.base_dir {
            if !base_dir.is_absolute() {
                return Err(Error::Validation {
                    field: "base_dir".into(),
                    message: format!("must be an absolute path, got {}", base_dir.display()),
                });
            }
        }

        if let Some(ref extensions) = config.script_extensions {
            for extension in extensions {
                Self::validate_extension(extension)?;
            }
        }

        if let Some(ref name) = config.display_name {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "display_name".into(),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
        }

        Ok(())
    }

    /// An extension is a leading dot followed by at least one character.
    fn validate_extension(extension: &str) -> Result<()> {
        if extension.is_empty() {
            return Err(Error::Validation {
                field: "script_extensions".into(),
                message: "Extensions cannot be empty".into(),
            });
        }

        if !extension.starts_with('.') || extension.len() == 1 {
            return Err(Error::Validation {
                field: "script_extensions".into(),
                message: format!("'{extension}' must start with a dot followed by a name"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn with_extensions(extensions: &[&str]) -> Config {
        Config {
            script_extensions: Some(extensions.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
        assert!(ConfigValidator::validate(&Config::defaults()).is_ok());
    }

    #[test]
    fn test_relative_base_dir_rejected() {
        let config = Config {
            base_dir: Some(PathBuf::from("relative/dir")),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "base_dir"));
    }

    #[test]
    fn test_extension_rules() {
        assert!(ConfigValidator::validate(&with_extensions(&[".kts"])).is_ok());
        assert!(ConfigValidator::validate(&with_extensions(&[""])).is_err());
        assert!(ConfigValidator::validate(&with_extensions(&["kts"])).is_err());
        assert!(ConfigValidator::validate(&with_extensions(&["."])).is_err());
        assert!(ConfigValidator::validate(&with_extensions(&[".gradle", "x"])).is_err());
    }

    #[test]
    fn test_blank_display_name_rejected() {
        let config = Config {
            display_name: Some("  ".into()),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
