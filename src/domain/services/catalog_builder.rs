//! Path catalog builder
//!
//! Merges template roots into one logical → physical mapping. Precedence is
//! the merge order: core, then base themes ancestor-first, then plugins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use futures::future::try_join_all;

use crate::domain::entities::{PathCatalog, TemplateRoot, TemplateSource};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::{TemplatePath, TemplatePathError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Path(#[from] TemplatePathError),
}

/// Logical/physical pairs for every file below one root.
pub async fn walk_root(
    fs: &dyn FileSystem,
    root: &TemplateRoot,
) -> Result<Vec<(TemplatePath, PathBuf)>, CatalogError> {
    let files = fs.walk(&root.path).await?;
    files
        .into_iter()
        .map(|file| {
            let logical = TemplatePath::from_physical(&root.path, &file)?;
            Ok((logical, file))
        })
        .collect()
}

/// Build the catalog for a full compile.
///
/// All roots are walked concurrently; merging happens afterwards in
/// precedence order so the result does not depend on walk timing.
pub async fn build_catalog(
    fs: &dyn FileSystem,
    core: &TemplateRoot,
    base_layers: &[TemplateRoot],
    plugin_templates: BTreeMap<TemplatePath, PathBuf>,
) -> Result<PathCatalog, CatalogError> {
    let (core_files, layer_files) = futures::try_join!(
        walk_root(fs, core),
        try_join_all(base_layers.iter().map(|root| walk_root(fs, root))),
    )?;

    let mut catalog = PathCatalog::new();

    for (logical, physical) in core_files {
        catalog.insert(logical, physical, core.source.clone());
    }

    for (root, files) in base_layers.iter().zip(layer_files) {
        for (logical, physical) in files {
            catalog.insert(logical, physical, root.source.clone());
        }
    }

    for (logical, physical) in plugin_templates {
        catalog.insert(logical, physical, TemplateSource::Plugin);
    }

    for o in catalog.overrides() {
        tracing::debug!(template = %o.path, from = %o.from, by = %o.by, "template overridden");
    }

    Ok(catalog)
}

/// Build the catalog from an already compiled output tree.
pub async fn catalog_from_output(
    fs: &dyn FileSystem,
    views_dir: &Path,
) -> Result<PathCatalog, CatalogError> {
    let root = TemplateRoot::new(TemplateSource::Output, views_dir);
    let mut catalog = PathCatalog::new();
    for (logical, physical) in walk_root(fs, &root).await? {
        catalog.insert(logical, physical, TemplateSource::Output);
    }
    Ok(catalog)
}
