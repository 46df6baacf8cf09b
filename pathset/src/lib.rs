#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathset
//!
//! Lazily resolved, finalizable collections of heterogeneous path elements.
//!
//! A collection accepts plain strings, paths, concrete files, other
//! collections, deferred producers and nested groups, and only turns them
//! into concrete paths when queried. It can be finalized so that its value
//! is computed exactly once and frozen.
//!
//! ## Core Types
//!
//! - [`ConfigurableFileCollection`] and [`State`]: the collection and its lifecycle
//! - [`PathElement`] and [`FileCollectionHandle`]: what a collection holds
//! - [`PathResolver`]: how literal tokens become paths
//! - [`DependencySet`] and [`Producer`]: "built by" declarations
//! - [`CollectionSnapshot`] and [`Managed`]: capturing and rebuilding a value
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathset::path::BaseDirResolver;
//! use pathset::{ConfigurableFileCollection, PathElement};
//! use std::path::PathBuf;
//! use std::rc::Rc;
//!
//! let resolver = Rc::new(BaseDirResolver::new("/root"));
//!
//! let inner = ConfigurableFileCollection::with_elements("inner", resolver.clone(), ["c.txt"]);
//! let mut files = ConfigurableFileCollection::named("files", resolver);
//! files
//!     .from([
//!         PathElement::from("a/b.txt"),
//!         PathElement::from(inner.into_handle()),
//!         PathElement::deferred(|| "d.txt".into()),
//!     ])
//!     .unwrap();
//!
//! let paths: Vec<PathBuf> = files.files().unwrap().into_iter().collect();
//! assert_eq!(
//!     paths,
//!     vec![
//!         PathBuf::from("/root/a/b.txt"),
//!         PathBuf::from("/root/c.txt"),
//!         PathBuf::from("/root/d.txt"),
//!     ]
//! );
//! ```

pub mod collection;
pub mod config;
pub mod dependency;
pub mod element;
pub mod error;
pub mod logging;
pub mod path;
pub mod resolve;
pub mod script;
pub mod snapshot;

// Re-export key types at crate root for convenience
pub use collection::{ConfigurableFileCollection, FromView, MutationOutcome, MutationPolicy, State};
pub use config::{Config, ConfigBuilder};
pub use dependency::{DependencyResolveContext, DependencySet, Producer};
pub use element::{Deferred, FileCollectionHandle, PathElement};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{BaseDirResolver, IdentityResolver, PathResolver};
pub use snapshot::{CollectionFactory, CollectionSnapshot, Managed};
