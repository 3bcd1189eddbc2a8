//! Domain Entities
//!
//! - `ThemeManifest` - A theme's `theme.json` linkage
//! - `TemplateRoot` - A directory contributing templates
//! - `PathCatalog` - Merged logical → physical mapping for one compile

mod catalog;
mod template_root;
mod theme;

pub use catalog::{CatalogEntry, CatalogOverride, PathCatalog};
pub use template_root::{TemplateRoot, TemplateSource};
pub use theme::{ThemeManifest, DEFAULT_TEMPLATES_DIR};
