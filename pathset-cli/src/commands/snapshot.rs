//! Command to capture a finalized collection or restore one.

use crate::error::CliError;
use crate::utils::{absolute, collection_from, load_configuration, print_paths, GlobalOptions};
use clap::Args;
use pathset::{CollectionFactory, CollectionSnapshot, IdentityResolver, Managed};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Finalize elements into a JSON snapshot, or rebuild a collection from one.
#[derive(Args)]
pub struct SnapshotCommand {
    /// Elements to capture
    #[arg(value_name = "ELEMENT", required_unless_present = "restore")]
    pub elements: Vec<String>,

    /// Write the snapshot to FILE instead of stdout
    #[arg(long, short, value_name = "FILE", conflicts_with = "restore")]
    pub output: Option<PathBuf>,

    /// Rebuild a collection from a snapshot file and print its paths
    #[arg(long, value_name = "FILE", conflicts_with = "elements")]
    pub restore: Option<PathBuf>,
}

impl SnapshotCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(ref file) = self.restore {
            return Self::restore(&absolute(file)?);
        }
        self.capture(global)
    }

    fn capture(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut files = collection_from(&config)?;
        files.from(self.elements)?;
        files.finalize_value()?;

        let snapshot = files.unpack_state()?;
        match self.output {
            Some(output) => {
                let output = absolute(&output)?;
                snapshot.write_to(&output)?;
                if !global.quiet {
                    eprintln!(
                        "Wrote {} path(s) to {}",
                        snapshot.paths.len(),
                        output.display()
                    );
                }
            }
            None => println!("{}", snapshot.to_json()?),
        }
        Ok(())
    }

    fn restore(file: &Path) -> Result<(), CliError> {
        let snapshot = CollectionSnapshot::read_from(file)?;
        let factory = CollectionFactory::new(Rc::new(IdentityResolver));
        let mut files = factory.from_state(snapshot);

        let resolved = files.files()?;
        print_paths(resolved.iter().map(PathBuf::as_path), false)
    }
}
