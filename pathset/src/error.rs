//! Error types for the pathset library.
//!
//! This module provides the error hierarchy for collection mutation,
//! element resolution, configuration and script dispatch, using `thiserror`
//! for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathset error.
///
/// # Examples
///
/// ```
/// use pathset::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathset library.
#[derive(Debug, Error)]
pub enum Error {
    /// A mutation was attempted on a strictly finalized collection.
    #[error("The value for {display_name} is final and cannot be changed.")]
    IllegalMutation {
        /// Display name of the collection.
        display_name: String,
    },

    /// An element could not be turned into a concrete path.
    #[error("cannot resolve element {element} at position {position}: {reason}")]
    UnresolvableElement {
        /// Rendering of the offending token.
        element: String,
        /// Zero-based index of the top-level element that contained it.
        position: usize,
        /// Why the resolver refused it.
        reason: String,
    },

    /// A path resolver does not understand a token.
    #[error("unsupported path token '{token}': {reason}")]
    UnsupportedToken {
        /// The refused token.
        token: String,
        /// Why it was refused.
        reason: String,
    },

    /// A collection contains itself, directly or through nested collections.
    #[error("{display_name} contains itself")]
    CyclicCollection {
        /// Display name of the collection that was re-entered.
        display_name: String,
    },

    /// No fallback script handler was registered.
    #[error("no fallback script handler registered")]
    MissingFallback,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A snapshot could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is a rejected mutation of a final collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::Error;
    ///
    /// let err = Error::IllegalMutation { display_name: "sources".into() };
    /// assert!(err.is_illegal_mutation());
    /// ```
    #[must_use]
    pub fn is_illegal_mutation(&self) -> bool {
        matches!(self, Self::IllegalMutation { .. })
    }

    /// Check if error came from an element the resolver could not interpret.
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::UnresolvableElement { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_mutation_error() {
        let err = Error::IllegalMutation {
            display_name: "file collection".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The value for file collection is final and cannot be changed."
        );
        assert!(err.is_illegal_mutation());
        assert!(!err.is_unresolvable());
    }

    #[test]
    fn test_unresolvable_element_error() {
        let err = Error::UnresolvableElement {
            element: "\"http://host/x\"".to_string(),
            position: 2,
            reason: "scheme 'http' is not supported".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("http://host/x"));
        assert!(display.contains("position 2"));
        assert!(display.contains("scheme 'http'"));
        assert!(err.is_unresolvable());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "escapes root".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
    }

    #[test]
    fn test_cyclic_collection_error() {
        let err = Error::CyclicCollection {
            display_name: "outputs".to_string(),
        };
        assert_eq!(err.to_string(), "outputs contains itself");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{err}").contains("serialization error"));
    }
}
