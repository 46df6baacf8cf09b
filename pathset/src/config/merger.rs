//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers.
///
/// # Examples
///
/// ```
/// use pathset::config::{Config, ConfigMerger};
///
/// let low = Config { display_name: Some("low".to_string()), ..Default::default() };
/// let high = Config { display_name: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.display_name, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    ///
    /// Script extensions are replaced as a whole, never concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }

        if source.expand_tilde.is_some() {
            target.expand_tilde = source.expand_tilde;
        }

        if source.allow_file_uris.is_some() {
            target.allow_file_uris = source.allow_file_uris;
        }

        if source.script_extensions.is_some() {
            target.script_extensions.clone_from(&source.script_extensions);
        }

        if source.display_name.is_some() {
            target.display_name.clone_from(&source.display_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unset_fields_do_not_override() {
        let mut target = Config {
            base_dir: Some(PathBuf::from("/low")),
            expand_tilde: Some(false),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.base_dir, Some(PathBuf::from("/low")));
        assert_eq!(target.expand_tilde, Some(false));
    }

    #[test]
    fn test_extensions_replaced() {
        let low = Config {
            script_extensions: Some(vec![".a".into(), ".b".into()]),
            ..Default::default()
        };
        let high = Config {
            script_extensions: Some(vec![".c".into()]),
            ..Default::default()
        };
        let merged = ConfigMerger::merge([&low, &high]);
        assert_eq!(merged.script_extensions, Some(vec![".c".to_string()]));
    }

    #[test]
    fn test_merge_order() {
        let layers = [
            Config {
                display_name: Some("file".into()),
                allow_file_uris: Some(false),
                ..Default::default()
            },
            Config {
                display_name: Some("env".into()),
                ..Default::default()
            },
        ];
        let merged = ConfigMerger::merge(&layers);
        assert_eq!(merged.display_name.as_deref(), Some("env"));
        assert_eq!(merged.allow_file_uris, Some(false));
    }
}
