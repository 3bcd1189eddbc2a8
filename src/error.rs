//! Error types for the template compiler
//!
//! Uses `thiserror` for library errors; each port and service has its own
//! error enum which folds into `ForumError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, PluginError, PrecompileError, ThemeError};
use crate::domain::services::{CatalogError, ImportError};
use crate::domain::value_objects::{TemplatePath, TemplatePathError};

/// Result type alias for compiler operations
pub type ForumResult<T> = Result<T, ForumError>;

/// Main error type for compiler operations
#[derive(Error, Debug)]
pub enum ForumError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    TemplatePath(#[from] TemplatePathError),

    /// Precompiler failed for one template
    #[error("failed to precompile {template}: {source}")]
    Precompile {
        template: TemplatePath,
        #[source]
        source: PrecompileError,
    },
}
