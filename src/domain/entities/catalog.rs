//! Path catalog entity
//!
//! Logical template path → physical file, merged for one compile pass.
//! Later insertions shadow earlier ones at the same logical path.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::TemplateSource;
use crate::domain::value_objects::TemplatePath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub physical: PathBuf,
    pub source: TemplateSource,
}

/// Record of a logical path being shadowed by a later layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOverride {
    pub path: TemplatePath,
    pub from: TemplateSource,
    pub by: TemplateSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCatalog {
    entries: BTreeMap<TemplatePath, CatalogEntry>,
    overrides: Vec<CatalogOverride>,
}

impl PathCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, shadowing any previous one at the same logical path.
    pub fn insert(&mut self, path: TemplatePath, physical: PathBuf, source: TemplateSource) {
        let entry = CatalogEntry {
            physical,
            source: source.clone(),
        };
        if let Some(previous) = self.entries.insert(path.clone(), entry) {
            self.overrides.push(CatalogOverride {
                path,
                from: previous.source,
                by: source,
            });
        }
    }

    pub fn get(&self, path: &TemplatePath) -> Option<&CatalogEntry> {
        self.entries.get(path)
    }

    pub fn physical(&self, path: &TemplatePath) -> Option<&Path> {
        self.entries.get(path).map(|e| e.physical.as_path())
    }

    pub fn contains(&self, path: &TemplatePath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in logical path order.
    pub fn iter(&self) -> impl Iterator<Item = (&TemplatePath, &CatalogEntry)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &TemplatePath> {
        self.entries.keys()
    }

    pub fn overrides(&self) -> &[CatalogOverride] {
        &self.overrides
    }
}
