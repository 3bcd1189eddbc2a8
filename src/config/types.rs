//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_MAX_IMPORTS;
use crate::domain::value_objects::{ConfigWarning, Environment};
use crate::error::ForumResult;

use super::loader;

/// Filesystem locations the compiler reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Output tree for expanded sources and compiled artifacts
    #[serde(default = "default_views_dir")]
    pub views_dir: PathBuf,

    /// Core templates shipped with the forum
    #[serde(default = "default_core_templates_path")]
    pub core_templates_path: PathBuf,

    /// Base templates used when the active theme has no base theme
    #[serde(default = "default_base_templates_path")]
    pub base_templates_path: PathBuf,

    /// Directory containing one subdirectory per installed theme
    #[serde(default = "default_themes_path")]
    pub themes_path: PathBuf,

    /// The active theme's `theme.json`
    #[serde(default = "default_theme_config")]
    pub theme_config: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            views_dir: default_views_dir(),
            core_templates_path: default_core_templates_path(),
            base_templates_path: default_base_templates_path(),
            themes_path: default_themes_path(),
            theme_config: default_theme_config(),
        }
    }
}

fn default_views_dir() -> PathBuf {
    PathBuf::from("build/public/templates")
}

fn default_core_templates_path() -> PathBuf {
    PathBuf::from("src/views")
}

fn default_base_templates_path() -> PathBuf {
    PathBuf::from("themes/persona/templates")
}

fn default_themes_path() -> PathBuf {
    PathBuf::from("themes")
}

fn default_theme_config() -> PathBuf {
    PathBuf::from("themes/persona/theme.json")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub env: Environment,
}

/// External precompiler; the built-in module precompiler is used when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecompilerConfig {
    /// argv of the precompiler command, e.g. `["node", "bin/precompile.js"]`
    #[serde(default)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// Template directories contributed by plugins, lowest priority first
    #[serde(default)]
    pub template_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Upper bound on partials inlined into one template
    #[serde(default = "default_max_imports")]
    pub max_imports: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_imports: default_max_imports(),
        }
    }
}

fn default_max_imports() -> usize {
    DEFAULT_MAX_IMPORTS
}

/// Main configuration (`forum.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub precompiler: PrecompilerConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,

    #[serde(default)]
    pub compile: CompileConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ForumResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the given file if it exists, otherwise defaults
    pub fn load_or_default(path: &Path) -> ForumResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Make every relative path absolute against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.paths.views_dir);
        resolve(&mut self.paths.core_templates_path);
        resolve(&mut self.paths.base_templates_path);
        resolve(&mut self.paths.themes_path);
        resolve(&mut self.paths.theme_config);
        self.plugins.template_dirs.iter_mut().for_each(resolve);
        self
    }
}
