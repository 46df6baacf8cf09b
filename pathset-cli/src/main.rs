//! Main entry point for the pathset CLI.
//!
//! Commands:
//! - `resolve`: Resolve elements to concrete paths
//! - `snapshot`: Capture or restore a finalized collection
//! - `scripts`: List or look up build scripts

use clap::Parser;
use pathset_cli::cli::{Cli, Command};
use pathset_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics through the CLI logger
    pathset::logging::install(pathset::init_logger(cli.verbose, cli.quiet));

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        base_dir: cli.base_dir,
    };

    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Snapshot(cmd) => cmd.execute(&global),
        Command::Scripts(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
