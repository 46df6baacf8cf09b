//! Locating build scripts and choosing a handler for them.
//!
//! [`ScriptFileResolver`] finds script files by basename and extension.
//! [`ScriptHandlerSelector`] maps a file name to the handler registered for
//! its extension, falling back to a designated default handler.

mod file_resolver;
mod selector;

pub use file_resolver::{ScriptFileResolver, DEFAULT_SCRIPT_EXTENSIONS};
pub use selector::{ScriptHandler, ScriptHandlerSelector};
