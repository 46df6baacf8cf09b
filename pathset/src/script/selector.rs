use crate::error::{Error, Result};
use crate::script::ScriptFileResolver;

/// A handler registered for one script extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHandler<H> {
    /// Extension including the leading dot, e.g. `.gradle.kts`.
    pub extension: String,
    /// Whether this handler takes files no other handler matches.
    pub fallback: bool,
    /// The handler itself.
    pub handler: H,
}

impl<H> ScriptHandler<H> {
    /// Registers `handler` for `extension`.
    pub fn new(extension: impl Into<String>, handler: H) -> Self {
        Self {
            extension: extension.into(),
            fallback: false,
            handler,
        }
    }

    /// Registers `handler` for `extension` as the fallback.
    pub fn fallback(extension: impl Into<String>, handler: H) -> Self {
        Self {
            fallback: true,
            ..Self::new(extension, handler)
        }
    }
}

/// Picks a script handler from a file name's extension.
///
/// # Examples
///
/// ```
/// use pathset::script::{ScriptHandler, ScriptHandlerSelector};
///
/// let selector = ScriptHandlerSelector::new(vec![
///     ScriptHandler::new(".gradle.kts", "kotlin"),
///     ScriptHandler::fallback(".gradle", "groovy"),
/// ])
/// .unwrap();
///
/// assert_eq!(*selector.select("build.gradle.kts"), "kotlin");
/// assert_eq!(*selector.select("build.groovy"), "groovy");
/// assert_eq!(selector.extensions(), vec![".gradle", ".gradle.kts"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptHandlerSelector<H> {
    handlers: Vec<ScriptHandler<H>>,
    fallback: usize,
}

impl<H> ScriptHandlerSelector<H> {
    /// Creates a selector over `handlers`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFallback`] if no handler is a fallback.
    pub fn new(handlers: Vec<ScriptHandler<H>>) -> Result<Self> {
        let fallback = handlers
            .iter()
            .position(|h| h.fallback)
            .ok_or(Error::MissingFallback)?;
        Ok(Self { handlers, fallback })
    }

    /// The handler for `file_name`.
    ///
    /// The first handler whose extension ends the name wins; otherwise the
    /// first fallback is used.
    #[must_use]
    pub fn select(&self, file_name: &str) -> &H {
        let matched = self
            .handlers
            .iter()
            .find(|h| file_name.ends_with(h.extension.as_str()))
            .unwrap_or(&self.handlers[self.fallback]);
        &matched.handler
    }

    /// Registered extensions, fallbacks first and the rest in lexical order.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut ordered: Vec<&ScriptHandler<H>> = self.handlers.iter().collect();
        ordered.sort_by(|a, b| {
            b.fallback
                .cmp(&a.fallback)
                .then_with(|| a.extension.cmp(&b.extension))
        });
        ordered.into_iter().map(|h| h.extension.as_str()).collect()
    }

    /// A file resolver searching the registered extensions in order.
    #[must_use]
    pub fn file_resolver(&self) -> ScriptFileResolver {
        ScriptFileResolver::new(self.extensions())
    }
}
