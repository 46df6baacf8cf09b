//! The configurable file collection and its finalization lifecycle.
//!
//! A [`ConfigurableFileCollection`] accumulates [`PathElement`]s and only
//! resolves them when queried. Its [`State`] decides what a query does:
//!
//! | State | Query | Mutation |
//! |---|---|---|
//! | `Mutable` | re-resolves every time | applied |
//! | `FinalizeNextQuery` | resolves, freezes, becomes `FinalLenient` | applied |
//! | `FinalLenient` | returns the frozen value | ignored with a warning |
//! | `FinalStrict` | returns the frozen value | `IllegalMutation` |
//!
//! "Built by" declarations live in a separate [`DependencySet`] and can be
//! changed in any state.
//!
//! # Examples
//!
//! ```
//! use pathset::path::BaseDirResolver;
//! use pathset::{ConfigurableFileCollection, State};
//! use std::path::PathBuf;
//! use std::rc::Rc;
//!
//! let mut sources = ConfigurableFileCollection::named("sources", Rc::new(BaseDirResolver::new("/work")));
//! sources.from(["src/lib.rs", "src/main.rs"]).unwrap();
//! sources.finalize_value().unwrap();
//!
//! assert_eq!(sources.state(), State::FinalStrict);
//! assert!(sources.contains(&PathBuf::from("/work/src/lib.rs")).unwrap());
//! assert!(sources.from(["late.rs"]).unwrap_err().is_illegal_mutation());
//! ```

mod state;
mod view;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use indexmap::IndexSet;

use crate::config::Config;
use crate::dependency::{DependencyResolveContext, DependencySet, Producer};
use crate::element::{FileCollectionHandle, PathElement};
use crate::error::{Error, Result};
use crate::path::{BaseDirResolver, PathResolver};
use crate::resolve::{ResolutionContext, UnpackingVisitor};

pub use state::{MutationOutcome, MutationPolicy, State};
pub use view::FromView;

/// Display name used when none is given.
pub const DEFAULT_DISPLAY_NAME: &str = "file collection";

/// A lazily resolved, finalizable set of path-like elements.
pub struct ConfigurableFileCollection {
    display_name: String,
    files: IndexSet<PathElement>,
    resolver: Rc<dyn PathResolver>,
    build_dependency: DependencySet,
    // Producers of nested collections, captured when the value was frozen.
    frozen_producers: IndexSet<Producer>,
    state: State,
}

impl ConfigurableFileCollection {
    /// Creates an empty collection with the default display name.
    #[must_use]
    pub fn new(resolver: Rc<dyn PathResolver>) -> Self {
        Self::named(DEFAULT_DISPLAY_NAME, resolver)
    }

    /// Creates an empty collection.
    pub fn named(display_name: impl Into<String>, resolver: Rc<dyn PathResolver>) -> Self {
        Self {
            display_name: display_name.into(),
            files: IndexSet::new(),
            resolver,
            build_dependency: DependencySet::new(),
            frozen_producers: IndexSet::new(),
            state: State::Mutable,
        }
    }

    /// Creates a collection seeded with `elements`.
    pub fn with_elements<I>(
        display_name: impl Into<String>,
        resolver: Rc<dyn PathResolver>,
        elements: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathElement>,
    {
        let mut collection = Self::named(display_name, resolver);
        collection
            .files
            .extend(elements.into_iter().map(Into::into));
        collection
    }

    /// Creates an empty collection resolving against the configured base
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no base directory is configured and the current
    /// directory cannot be determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = BaseDirResolver::from_config(config)?;
        let display_name = config
            .display_name
            .clone()
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
        Ok(Self::named(display_name, Rc::new(resolver)))
    }

    /// Moves the collection behind a shared handle so it can be nested.
    #[must_use]
    pub fn into_handle(self) -> FileCollectionHandle {
        FileCollectionHandle::new(self)
    }

    /// Diagnostic name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Current finalization state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// The resolver literal elements go through.
    #[must_use]
    pub fn resolver(&self) -> &Rc<dyn PathResolver> {
        &self.resolver
    }

    /// Replaces the elements.
    ///
    /// Each item becomes one element; groups are kept whole.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if the collection is strictly final.
    pub fn set_from<I>(&mut self, elements: I) -> Result<MutationOutcome>
    where
        I: IntoIterator,
        I::Item: Into<PathElement>,
    {
        let applied = self.mutate(|files| {
            files.clear();
            files.extend(elements.into_iter().map(Into::into));
        })?;
        Ok(outcome(applied))
    }

    /// Appends elements, skipping ones already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMutation`] if the collection is strictly final.
    pub fn from<I>(&mut self, elements: I) -> Result<MutationOutcome>
    where
        I: IntoIterator,
        I::Item: Into<PathElement>,
    {
        let applied = self.mutate(|files| files.extend(elements.into_iter().map(Into::into)))?;
        Ok(outcome(applied))
    }

    /// Live, guarded view of the raw elements.
    pub fn get_from(&mut self) -> FromView<'_> {
        FromView::new(self)
    }

    /// Declares producers of this collection's contents.
    ///
    /// Allowed in every state.
    pub fn built_by<I>(&mut self, producers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Producer>,
    {
        self.build_dependency.add(producers);
        self
    }

    /// Replaces the declared producers.
    ///
    /// Allowed in every state.
    pub fn set_built_by<I>(&mut self, producers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Producer>,
    {
        self.build_dependency.set_values(producers);
        self
    }

    /// Producers declared directly on this collection.
    #[must_use]
    pub fn built_by_values(&self) -> &IndexSet<Producer> {
        self.build_dependency.values()
    }

    /// The dependency declarations, for in-place edits.
    pub fn dependencies_mut(&mut self) -> &mut DependencySet {
        &mut self.build_dependency
    }

    /// Resolves and freezes the value; later mutation is an error.
    ///
    /// Does nothing if already strictly final.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails; the state is left unchanged.
    pub fn finalize_value(&mut self) -> Result<()> {
        if self.state != State::FinalStrict {
            self.calculate_finalized_value()?;
            self.transition(State::FinalStrict);
        }
        Ok(())
    }

    /// Schedules the value to be frozen by the next query.
    ///
    /// Only has an effect on a mutable collection.
    pub fn implicit_finalize_value(&mut self) {
        if self.state == State::Mutable {
            self.transition(State::FinalizeNextQuery);
        }
    }

    /// Resolves the collection to its ordered set of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if any element cannot be resolved.
    pub fn files(&mut self) -> Result<IndexSet<PathBuf>> {
        let mut context = ResolutionContext::new();
        self.visit_contents(&mut context)?;
        Ok(context.resolve_as_files())
    }

    /// Whether `path` is among the resolved paths.
    ///
    /// # Errors
    ///
    /// Returns an error if any element cannot be resolved.
    pub fn contains(&mut self, path: &Path) -> Result<bool> {
        Ok(self.files()?.contains(path))
    }

    /// Number of resolved paths.
    ///
    /// # Errors
    ///
    /// Returns an error if any element cannot be resolved.
    pub fn len(&mut self) -> Result<usize> {
        Ok(self.files()?.len())
    }

    /// Whether the collection resolves to no paths.
    ///
    /// # Errors
    ///
    /// Returns an error if any element cannot be resolved.
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.files()?.is_empty())
    }

    /// Adds this collection's paths and producers to `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if any element cannot be resolved.
    pub fn visit_contents(&mut self, context: &mut ResolutionContext) -> Result<()> {
        if self.state == State::FinalizeNextQuery {
            self.calculate_finalized_value()?;
            self.transition(State::FinalLenient);
        }

        if self.state.is_final() {
            context.add_files(
                self.files
                    .iter()
                    .filter_map(PathElement::as_file)
                    .map(Path::to_path_buf),
            );
        } else {
            log::debug!("resolving {} ({} element(s))", self.display_name, self.files.len());
            UnpackingVisitor::new(context, self.resolver.as_ref()).add_all(&self.files)?;
        }

        context.add_producers(self.declared_producers());
        Ok(())
    }

    /// Adds every producer this collection depends on to `context`.
    ///
    /// That is the directly declared producers plus those of nested
    /// collections reachable through the elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicCollection`] if a nested collection is
    /// currently being mutated further up the call stack.
    pub fn visit_dependencies(&self, context: &mut DependencyResolveContext) -> Result<()> {
        context.add(&self.build_dependency);
        context.add_all(self.frozen_producers.iter().cloned());
        self.files
            .iter()
            .try_for_each(|element| visit_element_dependencies(element, context))
    }

    /// Applies `change` to the raw elements if the state permits it.
    ///
    /// Returns `Ok(None)` when the change was ignored.
    pub(crate) fn mutate<R>(
        &mut self,
        change: impl FnOnce(&mut IndexSet<PathElement>) -> R,
    ) -> Result<Option<R>> {
        match self.state.mutation_policy() {
            MutationPolicy::Allow => Ok(Some(change(&mut self.files))),
            MutationPolicy::Ignore => {
                log::warn!(
                    "Changing the value for a FileCollection with a final value has been deprecated. ({})",
                    self.display_name
                );
                Ok(None)
            }
            MutationPolicy::Reject => Err(Error::IllegalMutation {
                display_name: self.display_name.clone(),
            }),
        }
    }

    fn declared_producers(&self) -> impl Iterator<Item = Producer> + '_ {
        self.build_dependency
            .values()
            .iter()
            .chain(&self.frozen_producers)
            .cloned()
    }

    fn calculate_finalized_value(&mut self) -> Result<()> {
        let mut context = ResolutionContext::new();
        UnpackingVisitor::new(&mut context, self.resolver.as_ref()).add_all(&self.files)?;
        let (files, producers) = context.into_parts();
        log::debug!("froze {} to {} path(s)", self.display_name, files.len());
        self.files = files.into_iter().map(PathElement::File).collect();
        self.frozen_producers.extend(producers);
        Ok(())
    }

    fn transition(&mut self, next: State) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {next}",
            self.state
        );
        log::debug!("{}: {} -> {next}", self.display_name, self.state);
        self.state = next;
    }
}

impl fmt::Debug for ConfigurableFileCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurableFileCollection")
            .field("display_name", &self.display_name)
            .field("state", &self.state)
            .field("files", &self.files)
            .field("built_by", self.build_dependency.values())
            .finish_non_exhaustive()
    }
}

fn outcome(applied: Option<()>) -> MutationOutcome {
    match applied {
        Some(()) => MutationOutcome::Applied,
        None => MutationOutcome::Ignored,
    }
}

fn visit_element_dependencies(
    element: &PathElement,
    context: &mut DependencyResolveContext,
) -> Result<()> {
    match element {
        PathElement::Collection(handle) => {
            if context.enter(handle) {
                handle.try_borrow()?.visit_dependencies(context)?;
            }
            Ok(())
        }
        PathElement::Deferred(deferred) => visit_element_dependencies(&deferred.get(), context),
        PathElement::Group(members) => members
            .iter()
            .try_for_each(|member| visit_element_dependencies(member, context)),
        PathElement::Literal(_) | PathElement::Path(_) | PathElement::File(_) => Ok(()),
    }
}
