//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the configuration file searched for.
pub const CONFIG_FILE_NAME: &str = "pathset.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathset::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::discover(Path::new(".")).unwrap() {
///     println!("using {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Finds the nearest `pathset.yaml` at or above `start_dir` and loads it.
    ///
    /// A relative `base_dir` in the file is taken relative to the directory
    /// holding the file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("loading configuration from {}", candidate.display());
                let mut config = Self::load_file(&candidate)?;
                if let Some(base_dir) = config.base_dir.take() {
                    config.base_dir = Some(current.join(base_dir));
                }
                return Ok(Some(ConfigSource {
                    path: candidate,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }
}
