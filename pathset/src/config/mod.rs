//! Configuration for collections built outside of code.
//!
//! Settings are merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHSET_*`)
//! 3. The nearest `pathset.yaml`, searched upwards from the working directory
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathset::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         base_dir: Some(PathBuf::from("/work")),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_dir, Some(PathBuf::from("/work")));
//! assert_eq!(config.expand_tilde, Some(true));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
