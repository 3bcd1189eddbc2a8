//! Theme chain resolver
//!
//! Walks `baseTheme` links and yields template roots ancestor-first, so that
//! merging in order lets descendants override their ancestors.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::{TemplateRoot, TemplateSource, ThemeManifest};
use crate::domain::ports::{ThemeError, ThemeRepository};

pub struct ThemeChainResolver<'a> {
    repo: &'a dyn ThemeRepository,
}

impl<'a> ThemeChainResolver<'a> {
    pub fn new(repo: &'a dyn ThemeRepository) -> Self {
        Self { repo }
    }

    /// Template directories of `theme_id` and all its ancestors, outermost
    /// ancestor first and `theme_id` last.
    pub async fn resolve(&self, theme_id: &str) -> Result<Vec<TemplateRoot>, ThemeError> {
        let mut visited: Vec<String> = Vec::new();
        let mut roots = Vec::new();
        let mut current = Some(theme_id.to_string());

        while let Some(id) = current {
            if visited.contains(&id) {
                visited.push(id);
                return Err(ThemeError::CircularBaseTheme { chain: visited });
            }

            validate_theme_id(&id)?;
            let manifest = self.repo.load(&id).await?;
            let templates_dir = manifest.templates_dir(&self.repo.theme_dir(&id));
            tracing::trace!(theme = %id, dir = %templates_dir.display(), "resolved theme templates");

            roots.push(TemplateRoot::new(TemplateSource::Theme(id.clone()), templates_dir));
            current = manifest.base_theme().map(str::to_string);
            visited.push(id);
        }

        roots.reverse();
        Ok(roots)
    }

    /// Base layers for the active theme: its base-theme chain when it declares
    /// one, otherwise the configured fallback templates directory.
    pub async fn base_layers(
        &self,
        active: &ThemeManifest,
        fallback: PathBuf,
    ) -> Result<Vec<TemplateRoot>, ThemeError> {
        match active.base_theme() {
            Some(base) => self.resolve(base).await,
            None => Ok(vec![TemplateRoot::new(TemplateSource::BaseTemplates, fallback)]),
        }
    }
}

/// A theme id names one directory below the themes root: no roots, drive
/// prefixes or `..`.
fn validate_theme_id(id: &str) -> Result<(), ThemeError> {
    let mut components = Path::new(id).components();
    let valid = !id.contains('\\')
        && matches!(components.next(), Some(Component::Normal(_)))
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if valid {
        Ok(())
    } else {
        Err(ThemeError::InvalidThemeId { id: id.to_string() })
    }
}
