use std::path::PathBuf;

use indexmap::IndexSet;

use crate::dependency::Producer;
use crate::element::PathElement;

/// Accumulator for one unpacking pass.
///
/// Entries are kept in the order they were produced, duplicates included,
/// until the pass is coalesced.
#[derive(Debug, Default)]
pub struct ResolutionContext {
    entries: Vec<PathBuf>,
    producers: IndexSet<Producer>,
}

impl ResolutionContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one concrete path.
    pub fn add_file(&mut self, path: PathBuf) {
        self.entries.push(path);
    }

    /// Records several concrete paths.
    pub fn add_files(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.entries.extend(paths);
    }

    /// Records producers declared by a collection met during the pass.
    pub fn add_producers(&mut self, producers: impl IntoIterator<Item = Producer>) {
        self.producers.extend(producers);
    }

    /// Number of entries recorded, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Producers met during the pass.
    #[must_use]
    pub fn producers(&self) -> &IndexSet<Producer> {
        &self.producers
    }

    /// Coalesces the entries into an ordered set of paths.
    #[must_use]
    pub fn resolve_as_files(&self) -> IndexSet<PathBuf> {
        self.entries.iter().cloned().collect()
    }

    /// Coalesces the entries into concrete file elements.
    ///
    /// This is the frozen element set of a finalized collection.
    #[must_use]
    pub fn resolve_as_elements(&self) -> IndexSet<PathElement> {
        self.entries.iter().cloned().map(PathElement::File).collect()
    }

    /// Consumes the context, returning coalesced paths and producers.
    #[must_use]
    pub fn into_parts(self) -> (IndexSet<PathBuf>, IndexSet<Producer>) {
        (self.entries.into_iter().collect(), self.producers)
    }
}
