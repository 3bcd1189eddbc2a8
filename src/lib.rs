//! Forum template compiler
//!
//! Builds the forum's server-rendered views: resolves the active theme's
//! inheritance chain, merges core, theme and plugin templates into one
//! catalog, inlines `<!-- IMPORT ... -->` partials and writes precompiled
//! artifacts to the public views directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileReport, CompileSettings, CompileUseCase, CompiledTemplate};
pub use config::Config;
pub use domain::entities::{PathCatalog, TemplateRoot, TemplateSource, ThemeManifest};
pub use domain::services::{ImportExpander, ImportWarning, ThemeChainResolver};
pub use domain::value_objects::{Environment, TemplatePath};
pub use error::{ForumError, ForumResult};
