//! Plugin host backed by configured template directories
//!
//! Each directory stands in for one installed plugin (or the active theme,
//! which registers like a plugin). Later directories override earlier ones.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{TemplateRoot, TemplateSource};
use crate::domain::ports::{FileSystem, PluginError, PluginHost};
use crate::domain::services::walk_root;
use crate::domain::value_objects::TemplatePath;

pub struct StaticPluginHost {
    fs: Arc<dyn FileSystem>,
    template_dirs: Vec<PathBuf>,
}

impl StaticPluginHost {
    pub fn new(fs: Arc<dyn FileSystem>, template_dirs: Vec<PathBuf>) -> Self {
        Self { fs, template_dirs }
    }
}

#[async_trait]
impl PluginHost for StaticPluginHost {
    async fn fire_hook(&self, hook: &str, payload: serde_json::Value) -> Result<(), PluginError> {
        tracing::debug!(hook, %payload, "firing hook (no listeners)");
        Ok(())
    }

    async fn templates(&self) -> Result<BTreeMap<TemplatePath, PathBuf>, PluginError> {
        let mut templates = BTreeMap::new();
        for dir in &self.template_dirs {
            let root = TemplateRoot::new(TemplateSource::Plugin, dir.clone());
            let files = walk_root(self.fs.as_ref(), &root)
                .await
                .map_err(|e| PluginError::Templates {
                    message: e.to_string(),
                })?;
            templates.extend(files);
        }
        Ok(templates)
    }
}
