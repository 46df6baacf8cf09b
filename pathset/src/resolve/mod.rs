//! Flattening path-like elements into concrete paths.
//!
//! An unpacking pass walks elements depth-first in insertion order. Literal
//! tokens go through the collection's [`PathResolver`](crate::path::PathResolver),
//! concrete files pass through, nested collections unpack themselves and
//! deferred values are invoked and their result unpacked in turn. Everything
//! lands in a [`ResolutionContext`], which coalesces the entries at the end.
//!
//! A pass either completes or fails as a whole; no partial result escapes.

mod context;
mod visitor;

pub use context::ResolutionContext;
pub use visitor::UnpackingVisitor;
