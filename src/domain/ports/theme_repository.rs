//! ThemeRepository port
//!
//! Loads a theme's manifest by id.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::ThemeManifest;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme config not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read theme config {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("invalid theme config {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("invalid theme id '{id}': must be a directory name inside the themes directory")]
    InvalidThemeId { id: String },

    #[error("circular base theme chain: {}", .chain.join(" -> "))]
    CircularBaseTheme { chain: Vec<String> },
}

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Directory of the theme with the given id.
    fn theme_dir(&self, theme_id: &str) -> PathBuf;

    /// Load the manifest of the theme with the given id.
    async fn load(&self, theme_id: &str) -> Result<ThemeManifest, ThemeError>;

    /// Load a manifest from an explicit file (the active theme's config).
    async fn load_file(&self, path: &Path) -> Result<ThemeManifest, ThemeError>;
}
