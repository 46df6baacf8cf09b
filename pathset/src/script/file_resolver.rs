use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Extensions searched when none are configured, in priority order.
pub const DEFAULT_SCRIPT_EXTENSIONS: [&str; 2] = [".gradle", ".gradle.kts"];

/// Finds script files by basename and extension.
///
/// # Examples
///
/// ```no_run
/// use pathset::script::ScriptFileResolver;
/// use std::path::Path;
///
/// let resolver = ScriptFileResolver::default();
/// if let Some(script) = resolver.resolve_script_file(Path::new("."), "build") {
///     println!("using {}", script.display());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFileResolver {
    extensions: Vec<String>,
}

impl Default for ScriptFileResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT_EXTENSIONS)
    }
}

impl ScriptFileResolver {
    /// Creates a resolver trying `extensions` in order.
    pub fn new<I>(extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a resolver from the configured extensions, or the defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match &config.script_extensions {
            Some(extensions) => Self::new(extensions.iter().cloned()),
            None => Self::default(),
        }
    }

    /// The extensions tried, in order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns the first `dir/basename{ext}` that is a regular file.
    #[must_use]
    pub fn resolve_script_file(&self, dir: &Path, basename: &str) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|extension| dir.join(format!("{basename}{extension}")))
            .find(|candidate| candidate.is_file())
    }

    /// Lists the regular files in `dir` carrying one of the extensions.
    ///
    /// Results are sorted by file name. A missing or unreadable directory
    /// yields an empty list.
    #[must_use]
    pub fn find_scripts_in(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            log::debug!("cannot list {}", dir.display());
            return Vec::new();
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.has_script_extension(path))
            .collect();
        found.sort();
        found
    }

    /// Whether the file name of `path` ends with one of the extensions.
    #[must_use]
    pub fn has_script_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                self.extensions
                    .iter()
                    .any(|extension| name.len() > extension.len() && name.ends_with(extension.as_str()))
            })
    }
}
