//! PluginHost port
//!
//! The two contracts the compiler consumes from the plugin system: firing a
//! static hook and enumerating plugin-provided template overrides.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::value_objects::TemplatePath;

/// Hook fired after the output directory is reset and before templates are merged.
pub const PRECOMPILE_HOOK: &str = "static:templates.precompile";

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("hook '{hook}' failed: {message}")]
    HookFailed { hook: String, message: String },

    #[error("failed to enumerate plugin templates: {message}")]
    Templates { message: String },
}

#[async_trait]
pub trait PluginHost: Send + Sync {
    /// Fire a named hook. Only failure is observed; the hook's output is discarded.
    async fn fire_hook(&self, hook: &str, payload: serde_json::Value) -> Result<(), PluginError>;

    /// Logical path → physical override file contributed by installed plugins.
    async fn templates(&self) -> Result<BTreeMap<TemplatePath, PathBuf>, PluginError>;
}

/// Plugin host with no plugins installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPluginHost;

#[async_trait]
impl PluginHost for NoopPluginHost {
    async fn fire_hook(&self, _hook: &str, _payload: serde_json::Value) -> Result<(), PluginError> {
        Ok(())
    }

    async fn templates(&self) -> Result<BTreeMap<TemplatePath, PathBuf>, PluginError> {
        Ok(BTreeMap::new())
    }
}
