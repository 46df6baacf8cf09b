//! Utility functions for CLI operations.
//!
//! Configuration loading, collection construction and output formatting
//! shared across commands.

use crate::error::CliError;
use pathset::{
    BaseDirResolver, Config, ConfigBuilder, ConfigurableFileCollection, PathResolver,
};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the base directory.
    pub base_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The nearest `pathset.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref base_dir) = global.base_dir {
        let base_dir = absolute(base_dir)?;
        builder = builder.with_config(Config {
            base_dir: Some(base_dir),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// An empty collection configured by `config`.
pub fn collection_from(config: &Config) -> Result<ConfigurableFileCollection, CliError> {
    Ok(ConfigurableFileCollection::from_config(config)?)
}

/// Makes a user-supplied path absolute against the current directory.
pub fn absolute(path: &Path) -> Result<PathBuf, CliError> {
    let resolver = BaseDirResolver::new(env::current_dir()?);
    resolver
        .resolve(path)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Renders paths one per line, or as a JSON array of strings.
pub fn format_paths<'a, I>(paths: I, json: bool) -> Result<String, CliError>
where
    I: IntoIterator<Item = &'a Path>,
{
    let rendered: Vec<String> = paths
        .into_iter()
        .map(|p| p.display().to_string())
        .collect();

    if json {
        Ok(serde_json::to_string_pretty(&rendered)?)
    } else {
        Ok(rendered.join("\n"))
    }
}

/// Prints paths unless there are none to print in plain mode.
pub fn print_paths<'a, I>(paths: I, json: bool) -> Result<(), CliError>
where
    I: IntoIterator<Item = &'a Path>,
{
    let output = format_paths(paths, json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
