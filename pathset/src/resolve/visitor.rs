use std::path::Path;

use crate::element::PathElement;
use crate::error::{Error, Result};
use crate::path::PathResolver;
use crate::resolve::ResolutionContext;

/// Recursively expands elements into a [`ResolutionContext`].
///
/// # Examples
///
/// ```
/// use pathset::path::BaseDirResolver;
/// use pathset::resolve::{ResolutionContext, UnpackingVisitor};
/// use pathset::PathElement;
///
/// let resolver = BaseDirResolver::new("/root");
/// let mut context = ResolutionContext::new();
/// let elements = [PathElement::from("a.txt"), PathElement::from(vec!["b.txt", "c.txt"])];
///
/// UnpackingVisitor::new(&mut context, &resolver).add_all(&elements).unwrap();
/// assert_eq!(context.len(), 3);
/// ```
pub struct UnpackingVisitor<'a> {
    context: &'a mut ResolutionContext,
    resolver: &'a dyn PathResolver,
}

impl<'a> UnpackingVisitor<'a> {
    /// Creates a visitor writing into `context`.
    pub fn new(context: &'a mut ResolutionContext, resolver: &'a dyn PathResolver) -> Self {
        Self { context, resolver }
    }

    /// Unpacks every element, numbering them by iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first element that cannot be resolved.
    pub fn add_all<'e, I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = &'e PathElement>,
    {
        for (position, element) in elements.into_iter().enumerate() {
            self.add(element, position)?;
        }
        Ok(())
    }

    /// Unpacks a single top-level element found at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvableElement`] if the resolver refuses a token
    /// reached from this element, or [`Error::CyclicCollection`] if a nested
    /// collection leads back to one being unpacked.
    pub fn add(&mut self, element: &PathElement, position: usize) -> Result<()> {
        match element {
            PathElement::Literal(text) => self.resolve_token(Path::new(text), position),
            PathElement::Path(path) => self.resolve_token(path, position),
            PathElement::File(path) => {
                self.context.add_file(path.clone());
                Ok(())
            }
            PathElement::Collection(handle) => {
                let mut nested = handle.try_borrow_mut()?;
                nested
                    .visit_contents(self.context)
                    .map_err(|err| reposition(err, position))
            }
            PathElement::Deferred(deferred) => {
                let value = deferred.get();
                self.add(&value, position)
            }
            PathElement::Group(members) => members
                .iter()
                .try_for_each(|member| self.add(member, position)),
        }
    }

    fn resolve_token(&mut self, token: &Path, position: usize) -> Result<()> {
        let resolved = self
            .resolver
            .resolve(token)
            .map_err(|err| Error::UnresolvableElement {
                element: format!("{token:?}"),
                position,
                reason: err.to_string(),
            })?;
        self.context.add_file(resolved);
        Ok(())
    }
}

/// Reports a failure inside a nested collection at the outer element's index.
fn reposition(err: Error, position: usize) -> Error {
    match err {
        Error::UnresolvableElement {
            element, reason, ..
        } => Error::UnresolvableElement {
            element,
            position,
            reason,
        },
        other => other,
    }
}
