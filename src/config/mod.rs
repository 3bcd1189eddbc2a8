//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FORUM_*)
//! 3. Config file (forum.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{ENV_RUNTIME, ENV_VIEWS_DIR};
pub use types::{
    CompileConfig, Config, PathsConfig, PluginsConfig, PrecompilerConfig, RuntimeConfig,
};
