//! Path-like elements a collection can hold.
//!
//! Elements are stored exactly as supplied and only become paths when a
//! collection is queried. Values compare structurally; deferred values and
//! nested collections compare by identity, so two handles to the same
//! collection collapse in a set while an equal-looking copy does not.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::collection::ConfigurableFileCollection;
use crate::error::{Error, Result};

/// Anything that stands for zero or more filesystem paths.
///
/// # Examples
///
/// ```
/// use pathset::{Deferred, PathElement};
/// use std::path::PathBuf;
///
/// let literal = PathElement::from("src/main.rs");
/// let group = PathElement::from(vec!["a.txt", "b.txt"]);
/// let later = PathElement::from(Deferred::new(|| PathElement::from("generated.rs")));
///
/// assert_eq!(literal, PathElement::Literal("src/main.rs".into()));
/// assert_eq!(group.kind(), "group");
/// assert_eq!(later.kind(), "deferred");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// A string token, resolved through the collection's resolver.
    Literal(String),
    /// A path token, resolved through the collection's resolver.
    Path(PathBuf),
    /// An already concrete file, passed through untouched.
    File(PathBuf),
    /// Another collection, unpacked with its own resolver and state.
    Collection(FileCollectionHandle),
    /// A value computed on every unpacking pass.
    Deferred(Deferred),
    /// A plain grouping of elements.
    Group(Vec<PathElement>),
}

impl PathElement {
    /// An element that resolves to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::Group(Vec::new())
    }

    /// Wraps a closure as a deferred element.
    pub fn deferred<F>(supplier: F) -> Self
    where
        F: Fn() -> PathElement + 'static,
    {
        Self::Deferred(Deferred::new(supplier))
    }

    /// Short name of the element kind, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Path(_) => "path",
            Self::File(_) => "file",
            Self::Collection(_) => "collection",
            Self::Deferred(_) => "deferred",
            Self::Group(_) => "group",
        }
    }

    /// The concrete path if this element is a [`PathElement::File`].
    #[must_use]
    pub fn as_file(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            _ => None,
        }
    }
}

impl From<&str> for PathElement {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for PathElement {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<&Path> for PathElement {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<PathBuf> for PathElement {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<FileCollectionHandle> for PathElement {
    fn from(value: FileCollectionHandle) -> Self {
        Self::Collection(value)
    }
}

impl From<&FileCollectionHandle> for PathElement {
    fn from(value: &FileCollectionHandle) -> Self {
        Self::Collection(value.clone())
    }
}

impl From<Deferred> for PathElement {
    fn from(value: Deferred) -> Self {
        Self::Deferred(value)
    }
}

impl<T: Into<PathElement>> From<Vec<T>> for PathElement {
    fn from(values: Vec<T>) -> Self {
        Self::Group(values.into_iter().map(Into::into).collect())
    }
}

/// A zero-argument supplier evaluated each time it is unpacked.
///
/// The supplier may return any element, including another deferred value
/// or a collection.
#[derive(Clone)]
pub struct Deferred(Rc<dyn Fn() -> PathElement>);

impl Deferred {
    /// Wraps `supplier`.
    pub fn new<F>(supplier: F) -> Self
    where
        F: Fn() -> PathElement + 'static,
    {
        Self(Rc::new(supplier))
    }

    /// Invokes the supplier.
    #[must_use]
    pub fn get(&self) -> PathElement {
        (self.0)()
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Deferred {}

impl Hash for Deferred {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deferred({:p})", self.addr())
    }
}

/// Shared handle to a collection, for nesting one collection in another.
///
/// Handles are single-threaded; the collection is borrowed for the duration
/// of each query or mutation made through the handle.
#[derive(Clone)]
pub struct FileCollectionHandle {
    inner: Rc<RefCell<ConfigurableFileCollection>>,
    display_name: Rc<str>,
}

impl FileCollectionHandle {
    /// Moves `collection` behind a shared handle.
    #[must_use]
    pub fn new(collection: ConfigurableFileCollection) -> Self {
        let display_name = Rc::from(collection.display_name());
        Self {
            inner: Rc::new(RefCell::new(collection)),
            display_name,
        }
    }

    /// Display name of the wrapped collection.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Borrows the collection.
    ///
    /// # Panics
    ///
    /// Panics if the collection is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, ConfigurableFileCollection> {
        self.inner.borrow()
    }

    /// Mutably borrows the collection.
    ///
    /// # Panics
    ///
    /// Panics if the collection is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, ConfigurableFileCollection> {
        self.inner.borrow_mut()
    }

    /// Borrows the collection, reporting re-entry as a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicCollection`] if the collection is already
    /// mutably borrowed further up the call stack.
    pub fn try_borrow(&self) -> Result<Ref<'_, ConfigurableFileCollection>> {
        self.inner.try_borrow().map_err(|_| self.cycle())
    }

    /// Mutably borrows the collection, reporting re-entry as a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicCollection`] if the collection is already
    /// borrowed further up the call stack.
    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, ConfigurableFileCollection>> {
        self.inner.try_borrow_mut().map_err(|_| self.cycle())
    }

    /// Whether both handles point at the same collection.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    fn cycle(&self) -> Error {
        Error::CyclicCollection {
            display_name: self.display_name.to_string(),
        }
    }
}

impl PartialEq for FileCollectionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for FileCollectionHandle {}

impl Hash for FileCollectionHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for FileCollectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Collection").field(&self.display_name).finish()
    }
}

impl From<ConfigurableFileCollection> for FileCollectionHandle {
    fn from(collection: ConfigurableFileCollection) -> Self {
        Self::new(collection)
    }
}
