//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ResolveCommand, ScriptsCommand, SnapshotCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving path collections.
#[derive(Parser)]
#[command(name = "pathset")]
#[command(version, about = "Resolve, finalize and snapshot path collections", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory relative elements are resolved against
    #[arg(long, value_name = "DIR", global = true, env = "PATHSET_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve elements to concrete paths
    Resolve(ResolveCommand),

    /// Capture or restore a finalized collection
    Snapshot(SnapshotCommand),

    /// List or look up build scripts in a directory
    Scripts(ScriptsCommand),
}
