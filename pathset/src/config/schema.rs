//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collection::DEFAULT_DISPLAY_NAME;
use crate::script::DEFAULT_SCRIPT_EXTENSIONS;

/// Complete configuration structure.
///
/// Every field is optional so partial sources can be layered; see
/// [`Config::with_defaults`] for the values used when nothing is set.
///
/// # Examples
///
/// ```
/// use pathset::config::Config;
///
/// let config: Config = serde_yaml::from_str("base_dir: /work\nexpand_tilde: false\n").unwrap();
/// assert_eq!(config.expand_tilde, Some(false));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory relative tokens are resolved against. Must be absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Expand a leading `~` to the home directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_tilde: Option<bool>,

    /// Accept `file:` URIs as path tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_file_uris: Option<bool>,

    /// Script extensions, each with a leading dot, in priority order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_extensions: Option<Vec<String>>,

    /// Display name given to collections created from this config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Config {
    /// The built-in defaults, with every field set.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            base_dir: None,
            expand_tilde: Some(true),
            allow_file_uris: Some(true),
            script_extensions: Some(
                DEFAULT_SCRIPT_EXTENSIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            display_name: Some(DEFAULT_DISPLAY_NAME.to_string()),
        }
    }

    /// Fills unset fields from [`Config::defaults`].
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::defaults();
        self.expand_tilde = self.expand_tilde.or(defaults.expand_tilde);
        self.allow_file_uris = self.allow_file_uris.or(defaults.allow_file_uris);
        self.script_extensions = self.script_extensions.or(defaults.script_extensions);
        self.display_name = self.display_name.or(defaults.display_name);
        self
    }
}
