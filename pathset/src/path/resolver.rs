//! The path resolver capability and its stock implementations.
//!
//! Collections never turn tokens into paths themselves. They hand every
//! literal they unpack to a [`PathResolver`] shared by reference, and treat
//! whatever it returns as the concrete entry.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::normalize;

/// Converts a path-like token into an absolute filesystem path.
///
/// Implementations must be side-effect free apart from cheap metadata
/// lookups; resolution may run on every query of a mutable collection.
#[cfg_attr(test, mockall::automock)]
pub trait PathResolver {
    /// Resolve `token` to an absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error for tokens the resolver cannot interpret.
    fn resolve(&self, token: &Path) -> Result<PathBuf>;
}

/// Resolves relative tokens against a fixed base directory.
///
/// # Examples
///
/// ```
/// use pathset::path::{BaseDirResolver, PathResolver};
/// use std::path::Path;
///
/// let resolver = BaseDirResolver::new("/root");
/// assert_eq!(resolver.resolve(Path::new("a/b.txt")).unwrap(), Path::new("/root/a/b.txt"));
/// assert!(resolver.resolve(Path::new("https://example.com/x")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BaseDirResolver {
    base_dir: PathBuf,
    expand_tilde: bool,
    allow_file_uris: bool,
}

impl BaseDirResolver {
    /// Create a resolver rooted at `base_dir`.
    ///
    /// Tilde expansion and `file:` URIs are enabled.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            expand_tilde: true,
            allow_file_uris: true,
        }
    }

    /// Create a resolver from configuration.
    ///
    /// Without a configured base directory the current directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_dir = match &config.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self::new(base_dir)
            .with_tilde_expansion(config.expand_tilde.unwrap_or(true))
            .with_file_uris(config.allow_file_uris.unwrap_or(true)))
    }

    /// Configure whether `~` and `~/path` expand to the home directory.
    #[must_use]
    pub fn with_tilde_expansion(mut self, enabled: bool) -> Self {
        self.expand_tilde = enabled;
        self
    }

    /// Configure whether `file:` URIs are accepted.
    #[must_use]
    pub fn with_file_uris(mut self, enabled: bool) -> Self {
        self.allow_file_uris = enabled;
        self
    }

    /// The directory relative tokens are resolved against.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl PathResolver for BaseDirResolver {
    fn resolve(&self, token: &Path) -> Result<PathBuf> {
        let Some(text) = token.to_str() else {
            return normalize::normalize_against(&self.base_dir, token);
        };

        if text.is_empty() {
            return Err(Error::UnsupportedToken {
                token: String::new(),
                reason: "empty path".to_string(),
            });
        }

        if let Some(scheme) = normalize::uri_scheme(text) {
            if scheme != "file" || !self.allow_file_uris {
                return Err(Error::UnsupportedToken {
                    token: text.to_string(),
                    reason: format!("scheme '{scheme}' is not supported"),
                });
            }
            return match normalize::file_uri_path(text) {
                Some(path) => normalize::resolve_components(&path),
                None => Err(Error::UnsupportedToken {
                    token: text.to_string(),
                    reason: "file URI does not name a local path".to_string(),
                }),
            };
        }

        let expanded = if self.expand_tilde {
            normalize::expand_tilde(token)?
        } else {
            token.to_path_buf()
        };
        normalize::normalize_against(&self.base_dir, &expanded)
    }
}

/// Accepts only absolute tokens and returns them unchanged.
///
/// Used for collections rebuilt from snapshots, whose entries are already
/// concrete.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl PathResolver for IdentityResolver {
    fn resolve(&self, token: &Path) -> Result<PathBuf> {
        if token.is_absolute() {
            Ok(token.to_path_buf())
        } else {
            Err(Error::UnsupportedToken {
                token: token.display().to_string(),
                reason: "relative paths need a base directory".to_string(),
            })
        }
    }
}
