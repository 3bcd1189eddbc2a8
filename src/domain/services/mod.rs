//! Domain Services
//!
//! Template resolution logic. Services reach the outside world only through
//! the ports in `domain::ports`.

mod catalog_builder;
mod import_expander;
mod theme_chain;

pub use catalog_builder::{build_catalog, catalog_from_output, walk_root, CatalogError};
pub use import_expander::{
    has_import_directive, ExpandOptions, Expansion, ImportError, ImportExpander, ImportWarning,
    ImportWarningKind, DEFAULT_MAX_IMPORTS,
};
pub use theme_chain::ThemeChainResolver;
