//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod environment;
mod template_path;

pub use config_warning::ConfigWarning;
pub use environment::Environment;
pub use template_path::{
    TemplatePath, TemplatePathError, ARTIFACT_EXTENSION, TEMPLATE_EXTENSION,
};
