//! Capturing a collection's value and rebuilding a collection from it.
//!
//! A snapshot is the flat, ordered list of concrete paths a collection
//! resolves to. Rebuilding seeds a fresh, mutable collection with those
//! paths as concrete file elements, so the rebuilt collection resolves to
//! the same list without touching a resolver.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::collection::{ConfigurableFileCollection, DEFAULT_DISPLAY_NAME};
use crate::element::PathElement;
use crate::error::Result;
use crate::path::PathResolver;

/// Values whose state can be captured and restored by a persistence layer.
pub trait Managed: Sized {
    /// The captured form.
    type State;

    /// Whether the value can never change after construction.
    fn immutable(&self) -> bool;

    /// Captures the current value, resolving it first if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be computed.
    fn unpack_state(&mut self) -> Result<Self::State>;
}

/// The captured value of a collection.
///
/// # Examples
///
/// ```
/// use pathset::CollectionSnapshot;
/// use std::path::PathBuf;
///
/// let snapshot = CollectionSnapshot::new(vec![PathBuf::from("/a"), PathBuf::from("/b")]);
/// let json = snapshot.to_json().unwrap();
/// assert_eq!(CollectionSnapshot::from_json(&json).unwrap(), snapshot);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    /// Concrete paths in resolution order.
    pub paths: Vec<PathBuf>,
}

impl CollectionSnapshot {
    /// Wraps an ordered list of paths.
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses JSON produced by [`CollectionSnapshot::to_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl From<IndexSet<PathBuf>> for CollectionSnapshot {
    fn from(paths: IndexSet<PathBuf>) -> Self {
        Self::new(paths.into_iter().collect())
    }
}

impl Managed for ConfigurableFileCollection {
    type State = CollectionSnapshot;

    fn immutable(&self) -> bool {
        false
    }

    fn unpack_state(&mut self) -> Result<CollectionSnapshot> {
        Ok(self.files()?.into())
    }
}

/// Rebuilds collections from snapshots with a fixed resolver.
#[derive(Clone)]
pub struct CollectionFactory {
    resolver: Rc<dyn PathResolver>,
}

impl CollectionFactory {
    /// Creates a factory whose collections use `resolver`.
    #[must_use]
    pub fn new(resolver: Rc<dyn PathResolver>) -> Self {
        Self { resolver }
    }

    /// Creates a mutable collection seeded with the snapshot's paths.
    #[must_use]
    pub fn from_state(&self, state: CollectionSnapshot) -> ConfigurableFileCollection {
        ConfigurableFileCollection::rebuild(Rc::clone(&self.resolver), state.paths)
    }
}

impl ConfigurableFileCollection {
    /// Creates a mutable collection seeded with concrete paths.
    pub fn rebuild<I>(resolver: Rc<dyn PathResolver>, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self::with_elements(
            DEFAULT_DISPLAY_NAME,
            resolver,
            paths.into_iter().map(PathElement::File),
        )
    }

    /// A factory that rebuilds collections sharing this one's resolver.
    #[must_use]
    pub fn managed_factory(&self) -> CollectionFactory {
        CollectionFactory::new(Rc::clone(self.resolver()))
    }
}
