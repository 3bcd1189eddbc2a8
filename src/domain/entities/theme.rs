//! Theme manifest entity
//!
//! The subset of a theme's `theme.json` the compiler cares about.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Templates subdirectory used when a theme does not name one.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    /// Parent theme whose templates this theme inherits
    #[serde(default)]
    pub base_theme: Option<String>,

    /// Override of the templates subdirectory name
    #[serde(default)]
    pub templates: Option<String>,
}

impl ThemeManifest {
    /// Directory holding this theme's templates, given the theme's own directory.
    pub fn templates_dir(&self, theme_dir: &Path) -> PathBuf {
        let name = self
            .templates
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TEMPLATES_DIR);
        theme_dir.join(name)
    }

    /// Declared base theme, treating an empty string as absent.
    pub fn base_theme(&self) -> Option<&str> {
        self.base_theme.as_deref().filter(|b| !b.trim().is_empty())
    }
}
