//! Command to find build scripts in a directory.

use crate::error::CliError;
use crate::utils::{absolute, load_configuration, print_paths, GlobalOptions};
use clap::Args;
use pathset::script::ScriptFileResolver;
use std::path::PathBuf;

/// List the scripts in a directory, or find the one with a given basename.
#[derive(Args)]
pub struct ScriptsCommand {
    /// Directory to search
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Resolve `NAME` plus the first matching extension
    #[arg(long, value_name = "NAME")]
    pub basename: Option<String>,

    /// Print a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,
}

impl ScriptsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = absolute(&self.dir)?;
        if !dir.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let resolver = ScriptFileResolver::from_config(&config);
        match self.basename {
            Some(ref name) => {
                let script = resolver.resolve_script_file(&dir, name).ok_or_else(|| {
                    CliError::SemanticFailure(format!(
                        "No script named '{name}' in {} (tried {})",
                        dir.display(),
                        resolver.extensions().join(", ")
                    ))
                })?;
                print_paths([script.as_path()], self.json)
            }
            None => {
                let scripts = resolver.find_scripts_in(&dir);
                print_paths(scripts.iter().map(PathBuf::as_path), self.json)
            }
        }
    }
}
