//! Compile Settings
//!
//! Explicit configuration handed to the compile use case.

use std::path::PathBuf;

use crate::domain::services::ExpandOptions;
use crate::domain::value_objects::Environment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSettings {
    /// Output tree (cleared on every full compile)
    pub views_dir: PathBuf,
    /// Core templates shipped with the forum
    pub core_templates_path: PathBuf,
    /// Base layer used when the active theme declares no base theme
    pub base_templates_path: PathBuf,
    /// The active theme's `theme.json`
    pub theme_config: PathBuf,
    /// Decides whether artifacts are minified
    pub environment: Environment,
    pub expand: ExpandOptions,
}

impl CompileSettings {
    pub fn minify(&self) -> bool {
        self.environment.minify()
    }
}
