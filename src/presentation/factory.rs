//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{CompileSettings, CompileUseCase};
use crate::config::Config;
use crate::domain::ports::{FileSystem, NoopPluginHost, PluginHost, Precompiler};
use crate::domain::services::ExpandOptions;
use crate::infrastructure::{
    CommandPrecompiler, JsonThemeRepository, LocalFs, ModulePrecompiler, StaticPluginHost,
};

/// Settings for the compile use case, taken from a resolved config.
pub fn compile_settings(config: &Config) -> CompileSettings {
    CompileSettings {
        views_dir: config.paths.views_dir.clone(),
        core_templates_path: config.paths.core_templates_path.clone(),
        base_templates_path: config.paths.base_templates_path.clone(),
        theme_config: config.paths.theme_config.clone(),
        environment: config.runtime.env,
        expand: ExpandOptions {
            max_imports: config.compile.max_imports,
        },
    }
}

/// The configured external precompiler, or the built-in one.
pub fn create_precompiler(config: &Config) -> Arc<dyn Precompiler> {
    match CommandPrecompiler::from_argv(&config.precompiler.command) {
        Some(command) => Arc::new(command),
        None => Arc::new(ModulePrecompiler::new()),
    }
}

/// Plugin host over the configured override directories.
pub fn create_plugin_host(config: &Config, fs: Arc<dyn FileSystem>) -> Arc<dyn PluginHost> {
    let dirs = &config.plugins.template_dirs;
    if dirs.is_empty() {
        Arc::new(NoopPluginHost)
    } else {
        Arc::new(StaticPluginHost::new(fs, dirs.clone()))
    }
}

/// Create a compile use case with all dependencies wired up
pub fn create_compile_use_case(config: &Config) -> CompileUseCase {
    let fs: Arc<dyn FileSystem> = Arc::new(LocalFs::new());
    let plugins = create_plugin_host(config, fs.clone());
    let themes = JsonThemeRepository::new(config.paths.themes_path.clone());

    CompileUseCase::new(
        compile_settings(config),
        fs,
        plugins,
        create_precompiler(config),
        Arc::new(themes),
    )
}
