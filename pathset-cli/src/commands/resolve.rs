//! Command to resolve elements through a collection.

use crate::error::CliError;
use crate::utils::{collection_from, load_configuration, print_paths, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Resolve elements to concrete paths, in order and without duplicates.
#[derive(Args)]
pub struct ResolveCommand {
    /// Elements to resolve
    #[arg(value_name = "ELEMENT", required = true)]
    pub elements: Vec<String>,

    /// Finalize the collection before querying it
    #[arg(long)]
    pub finalize: bool,

    /// Print a JSON array instead of one path per line
    #[arg(long)]
    pub json: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut files = collection_from(&config)?;
        files.from(self.elements)?;

        if self.finalize {
            files.finalize_value()?;
        }

        let resolved = files.files()?;
        if global.verbose {
            eprintln!(
                "{}: {} path(s), {}",
                files.display_name(),
                resolved.len(),
                files.state()
            );
        }

        print_paths(resolved.iter().map(PathBuf::as_path), self.json)
    }
}
