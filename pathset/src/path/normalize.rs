//! Lexical path normalization.
//!
//! Everything here works on the path text only: tilde expansion, joining a
//! relative token onto a base directory, folding `.` and `..` components and
//! recognizing URI-style tokens. Nothing touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(expand_tilde(Path::new("/absolute")).unwrap(), Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non UTF-8 paths cannot start with a tilde we would recognize.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if `..` components would escape the root directory.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Make `path` absolute against `base` and fold its dot components.
///
/// Absolute paths ignore `base`.
///
/// # Errors
///
/// Returns an error if the joined path escapes the root.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::normalize_against;
/// use std::path::Path;
///
/// let p = normalize_against(Path::new("/root"), Path::new("a/../b.txt")).unwrap();
/// assert_eq!(p, Path::new("/root/b.txt"));
/// ```
pub fn normalize_against(base: &Path, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        resolve_components(path)
    } else {
        resolve_components(&base.join(path))
    }
}

/// Returns the URI scheme of `token` if it looks like `scheme:...`.
///
/// A single letter before the colon is treated as a Windows drive, not a
/// scheme.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::uri_scheme;
///
/// assert_eq!(uri_scheme("https://example.com/a"), Some("https"));
/// assert_eq!(uri_scheme("file:/tmp/a"), Some("file"));
/// assert_eq!(uri_scheme("C:/tmp"), None);
/// assert_eq!(uri_scheme("src/main.rs"), None);
/// ```
#[must_use]
pub fn uri_scheme(token: &str) -> Option<&str> {
    let (scheme, _) = token.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if scheme.len() < 2 || !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(scheme)
}

/// Strips a `file:` URI down to the local path it names.
///
/// Accepts `file:/p` and `file://host/p` where the host is empty or
/// `localhost`. Percent escapes in the path are decoded. Returns `None`
/// for tokens that are not file URIs, URIs naming another host, and
/// malformed escapes.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::file_uri_path;
/// use std::path::Path;
///
/// assert_eq!(file_uri_path("file:///tmp/a.txt").as_deref(), Some(Path::new("/tmp/a.txt")));
/// assert_eq!(file_uri_path("file:///tmp/a%20b").as_deref(), Some(Path::new("/tmp/a b")));
/// assert_eq!(file_uri_path("file://server/share"), None);
/// assert_eq!(file_uri_path("/tmp/a.txt"), None);
/// ```
#[must_use]
pub fn file_uri_path(token: &str) -> Option<PathBuf> {
    let rest = token.strip_prefix("file:")?;
    let path = match rest.strip_prefix("//") {
        Some(authority_and_path) => {
            let split = authority_and_path.find('/')?;
            let (host, path) = authority_and_path.split_at(split);
            if !(host.is_empty() || host.eq_ignore_ascii_case("localhost")) {
                return None;
            }
            path
        }
        None if rest.starts_with('/') => rest,
        None => return None,
    };
    percent_decode(path).map(PathBuf::from)
}

/// Decodes `%XX` escapes; `None` for truncated or non-hex escapes and
/// for byte sequences that are not UTF-8.
fn percent_decode(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = text.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).ok()
}
