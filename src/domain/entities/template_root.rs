//! Template root entity
//!
//! A physical directory that contributes templates to the catalog, tagged with
//! where it came from.

use std::fmt;
use std::path::PathBuf;

/// Origin of a catalog entry, used for override reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateSource {
    /// Core templates shipped with the forum
    Core,
    /// Configured base templates used when the active theme has no base theme
    BaseTemplates,
    /// A theme in the base-theme chain
    Theme(String),
    /// A plugin-provided override
    Plugin,
    /// An existing compiled output tree (single-template rebuilds)
    Output,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Core => f.write_str("core"),
            TemplateSource::BaseTemplates => f.write_str("base"),
            TemplateSource::Theme(id) => write!(f, "theme:{}", id),
            TemplateSource::Plugin => f.write_str("plugin"),
            TemplateSource::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    pub source: TemplateSource,
    pub path: PathBuf,
}

impl TemplateRoot {
    pub fn new(source: TemplateSource, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }
}
