//! Declared producers of a collection's contents.
//!
//! A [`DependencySet`] only stores "built by" declarations. Scheduling the
//! producers is left to whoever drains a [`DependencyResolveContext`].

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::element::FileCollectionHandle;

/// Reference to something that must run before a collection's paths are valid.
///
/// # Examples
///
/// ```
/// use pathset::Producer;
///
/// let task = Producer::new(":app:compileJava");
/// assert_eq!(task.path(), ":app:compileJava");
/// assert_eq!(task.to_string(), ":app:compileJava");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Producer(String);

impl Producer {
    /// Creates a producer reference from its task path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The task path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Producer {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Producer {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Insertion-ordered set of producers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    values: IndexSet<Producer>,
}

impl DependencySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds producers, ignoring ones already present.
    pub fn add<I>(&mut self, producers: I)
    where
        I: IntoIterator,
        I::Item: Into<Producer>,
    {
        self.values.extend(producers.into_iter().map(Into::into));
    }

    /// Replaces every declared producer.
    pub fn set_values<I>(&mut self, producers: I)
    where
        I: IntoIterator,
        I::Item: Into<Producer>,
    {
        self.values.clear();
        self.add(producers);
    }

    /// The declared producers.
    #[must_use]
    pub fn values(&self) -> &IndexSet<Producer> {
        &self.values
    }

    /// Direct access to the declarations for in-place edits.
    pub fn mutable_values(&mut self) -> &mut IndexSet<Producer> {
        &mut self.values
    }

    /// Number of declared producers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accumulates producers while walking a collection graph.
///
/// Each nested collection is entered at most once per walk. Entered
/// collections are held until the context is dropped, so a collection
/// produced by a deferred element cannot be freed and its address reused
/// by another one mid-walk.
#[derive(Debug, Default)]
pub struct DependencyResolveContext {
    producers: IndexSet<Producer>,
    entered: HashSet<FileCollectionHandle>,
}

impl DependencyResolveContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every producer declared in `set`.
    pub fn add(&mut self, set: &DependencySet) {
        self.add_all(set.values().iter().cloned());
    }

    /// Adds individual producers.
    pub fn add_all(&mut self, producers: impl IntoIterator<Item = Producer>) {
        self.producers.extend(producers);
    }

    /// Marks a collection as visited; false if it was already.
    pub(crate) fn enter(&mut self, collection: &FileCollectionHandle) -> bool {
        self.entered.insert(collection.clone())
    }

    /// Producers collected so far, in discovery order.
    #[must_use]
    pub fn producers(&self) -> &IndexSet<Producer> {
        &self.producers
    }

    /// Consumes the context, returning the producers.
    #[must_use]
    pub fn into_producers(self) -> IndexSet<Producer> {
        self.producers
    }
}
