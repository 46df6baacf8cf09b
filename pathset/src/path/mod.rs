//! Turning path-like tokens into absolute paths.
//!
//! # Key Concepts
//!
//! ## Resolver capability
//!
//! [`PathResolver`] is the only place a token becomes a filesystem path.
//! Collections hold a shared reference to one and call it during unpacking.
//!
//! ## Normalization
//!
//! [`BaseDirResolver`] normalizes lexically:
//! - Expanding tilde (~) to the home directory
//! - Joining relative tokens onto its base directory
//! - Resolving `.` and `..` components
//! - Accepting `file:` URIs and rejecting other schemes
//!
//! It never follows symlinks or checks existence.
//!
//! # Examples
//!
//! ```
//! use pathset::path::{BaseDirResolver, PathResolver};
//! use std::path::Path;
//!
//! let resolver = BaseDirResolver::new("/work");
//! let resolved = resolver.resolve(Path::new("src/../build.gradle")).unwrap();
//! assert_eq!(resolved, Path::new("/work/build.gradle"));
//! ```

pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::{BaseDirResolver, IdentityResolver, PathResolver};

#[cfg(test)]
pub use resolver::MockPathResolver;
