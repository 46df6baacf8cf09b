//! CLI command implementations.
//!
//! - `resolve`: Resolve elements to concrete paths
//! - `snapshot`: Capture or restore a finalized collection
//! - `scripts`: List or look up build scripts

pub mod resolve;
pub mod scripts;
pub mod snapshot;

pub use resolve::ResolveCommand;
pub use scripts::ScriptsCommand;
pub use snapshot::SnapshotCommand;
