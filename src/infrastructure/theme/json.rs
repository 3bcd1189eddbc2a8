//! `theme.json` backed ThemeRepository

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::ThemeManifest;
use crate::domain::ports::{ThemeError, ThemeRepository};

/// Manifest file name inside a theme directory
pub const THEME_MANIFEST: &str = "theme.json";

/// Reads `<themes_path>/<id>/theme.json`.
#[derive(Debug, Clone)]
pub struct JsonThemeRepository {
    themes_path: PathBuf,
}

impl JsonThemeRepository {
    pub fn new(themes_path: impl Into<PathBuf>) -> Self {
        Self {
            themes_path: themes_path.into(),
        }
    }
}

#[async_trait]
impl ThemeRepository for JsonThemeRepository {
    fn theme_dir(&self, theme_id: &str) -> PathBuf {
        self.themes_path.join(theme_id)
    }

    async fn load(&self, theme_id: &str) -> Result<ThemeManifest, ThemeError> {
        self.load_file(&self.theme_dir(theme_id).join(THEME_MANIFEST))
            .await
    }

    async fn load_file(&self, path: &Path) -> Result<ThemeManifest, ThemeError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ThemeError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ThemeError::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|e| ThemeError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
