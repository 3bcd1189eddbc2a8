//! In-memory ThemeRepository for tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::ThemeManifest;
use crate::domain::ports::{ThemeError, ThemeRepository};

/// Themes live under `/themes/<id>`; explicit manifest files are keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeRepository {
    manifests: HashMap<String, ThemeManifest>,
    files: HashMap<PathBuf, ThemeManifest>,
}

impl MemoryThemeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, id: &str, base: Option<&str>, templates: Option<&str>) -> Self {
        self.manifests.insert(
            id.to_string(),
            ThemeManifest {
                base_theme: base.map(str::to_string),
                templates: templates.map(str::to_string),
            },
        );
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, manifest: ThemeManifest) -> Self {
        self.files.insert(path.into(), manifest);
        self
    }
}

#[async_trait]
impl ThemeRepository for MemoryThemeRepository {
    fn theme_dir(&self, theme_id: &str) -> PathBuf {
        PathBuf::from("/themes").join(theme_id)
    }

    async fn load(&self, theme_id: &str) -> Result<ThemeManifest, ThemeError> {
        self.manifests
            .get(theme_id)
            .cloned()
            .ok_or_else(|| ThemeError::NotFound {
                path: self.theme_dir(theme_id).join("theme.json"),
            })
    }

    async fn load_file(&self, path: &Path) -> Result<ThemeManifest, ThemeError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ThemeError::NotFound {
                path: path.to_path_buf(),
            })
    }
}
