//! Common test utilities for integration tests.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use pathset::path::BaseDirResolver;
use pathset::{ConfigurableFileCollection, PathElement, PathResolver, Result};

/// Base directory every test resolver resolves against.
pub const BASE: &str = "/root";

/// A resolver against [`BASE`].
#[allow(dead_code)]
pub fn base_resolver() -> Rc<dyn PathResolver> {
    Rc::new(BaseDirResolver::new(BASE))
}

/// Resolver that counts how often it is consulted.
#[allow(dead_code)]
pub struct CountingResolver {
    inner: BaseDirResolver,
    calls: Rc<Cell<usize>>,
}

impl PathResolver for CountingResolver {
    fn resolve(&self, token: &Path) -> Result<PathBuf> {
        self.calls.set(self.calls.get() + 1);
        self.inner.resolve(token)
    }
}

/// A counting resolver against [`BASE`] plus the shared call counter.
#[allow(dead_code)]
pub fn counting_resolver() -> (Rc<dyn PathResolver>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let resolver = CountingResolver {
        inner: BaseDirResolver::new(BASE),
        calls: Rc::clone(&calls),
    };
    (Rc::new(resolver), calls)
}

/// A named collection against [`BASE`] seeded with `elements`.
#[allow(dead_code)]
pub fn collection<I>(name: &str, elements: I) -> ConfigurableFileCollection
where
    I: IntoIterator,
    I::Item: Into<PathElement>,
{
    ConfigurableFileCollection::with_elements(name, base_resolver(), elements)
}

/// Resolves `files` and renders each path for easy comparison.
#[allow(dead_code)]
pub fn resolved(files: &mut ConfigurableFileCollection) -> Vec<String> {
    files
        .files()
        .unwrap()
        .iter()
        .map(|p| p.display().to_string())
        .collect()
}
