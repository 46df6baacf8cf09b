use crate::collection::ConfigurableFileCollection;
use crate::element::PathElement;
use crate::error::Result;

/// Live view of a collection's raw elements.
///
/// Reads go straight to the backing set. Every write is routed through the
/// owning collection's mutation guard, so a view obeys finalization exactly
/// like the collection's own mutators.
///
/// # Examples
///
/// ```
/// use pathset::path::IdentityResolver;
/// use pathset::{ConfigurableFileCollection, PathElement};
/// use std::rc::Rc;
///
/// let mut files = ConfigurableFileCollection::new(Rc::new(IdentityResolver));
/// let mut view = files.get_from();
/// assert!(view.add("/a").unwrap());
/// assert!(!view.add("/a").unwrap());
/// assert!(view.contains(&PathElement::from("/a")));
/// assert_eq!(view.len(), 1);
/// ```
pub struct FromView<'a> {
    owner: &'a mut ConfigurableFileCollection,
}

impl<'a> FromView<'a> {
    pub(crate) fn new(owner: &'a mut ConfigurableFileCollection) -> Self {
        Self { owner }
    }

    /// Iterates the raw elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PathElement> + '_ {
        self.owner.files.iter()
    }

    /// Number of raw elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owner.files.len()
    }

    /// Whether there are no raw elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owner.files.is_empty()
    }

    /// Whether `element` is one of the raw elements.
    #[must_use]
    pub fn contains(&self, element: &PathElement) -> bool {
        self.owner.files.contains(element)
    }

    /// Adds an element; true if the set changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`](crate::Error::IllegalMutation) if the
    /// owner is strictly final.
    pub fn add(&mut self, element: impl Into<PathElement>) -> Result<bool> {
        let element = element.into();
        Ok(self
            .owner
            .mutate(|files| files.insert(element))?
            .unwrap_or(false))
    }

    /// Removes an element, keeping the order of the rest; true if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`](crate::Error::IllegalMutation) if the
    /// owner is strictly final.
    pub fn remove(&mut self, element: &PathElement) -> Result<bool> {
        Ok(self
            .owner
            .mutate(|files| files.shift_remove(element))?
            .unwrap_or(false))
    }

    /// Keeps only the elements for which `keep` returns true.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`](crate::Error::IllegalMutation) if the
    /// owner is strictly final.
    pub fn retain(&mut self, keep: impl FnMut(&PathElement) -> bool) -> Result<()> {
        self.owner.mutate(|files| files.retain(keep))?;
        Ok(())
    }

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`](crate::Error::IllegalMutation) if the
    /// owner is strictly final.
    pub fn clear(&mut self) -> Result<()> {
        self.owner.mutate(|files| files.clear())?;
        Ok(())
    }
}
