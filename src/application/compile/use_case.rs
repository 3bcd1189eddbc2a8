//! Compile Use Case
//!
//! Orchestrates the full rebuild:
//! 1. Resolve the active theme's base layers
//! 2. Reset the output directory and fire the precompile hook
//! 3. Merge core, base themes and plugin overrides into a catalog
//! 4. Per template, concurrently: expand imports, then write the expanded
//!    source and the precompiled artifact
//!
//! and the single-template rebuild against an existing output tree.

use std::path::Path;
use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::entities::{PathCatalog, TemplateRoot, TemplateSource};
use crate::domain::ports::{
    FileSystem, PluginHost, PrecompileOptions, Precompiler, ThemeRepository, PRECOMPILE_HOOK,
};
use crate::domain::services::{
    build_catalog, catalog_from_output, Expansion, ImportExpander, ImportWarning,
    ThemeChainResolver,
};
use crate::domain::value_objects::TemplatePath;
use crate::error::{ForumError, ForumResult};

use super::options::CompileSettings;
use super::result::{CompileReport, CompiledTemplate};

/// Compile use case - parameterized by its ports so tests can run in memory.
pub struct CompileUseCase {
    settings: CompileSettings,
    fs: Arc<dyn FileSystem>,
    plugins: Arc<dyn PluginHost>,
    precompiler: Arc<dyn Precompiler>,
    themes: Arc<dyn ThemeRepository>,
}

impl CompileUseCase {
    pub fn new(
        settings: CompileSettings,
        fs: Arc<dyn FileSystem>,
        plugins: Arc<dyn PluginHost>,
        precompiler: Arc<dyn Precompiler>,
        themes: Arc<dyn ThemeRepository>,
    ) -> Self {
        Self {
            settings,
            fs,
            plugins,
            precompiler,
            themes,
        }
    }

    pub fn settings(&self) -> &CompileSettings {
        &self.settings
    }

    /// Base-theme layers of the active theme, ancestor first.
    pub async fn base_layers(&self) -> ForumResult<Vec<TemplateRoot>> {
        let active = self.themes.load_file(&self.settings.theme_config).await?;
        let layers = ThemeChainResolver::new(self.themes.as_ref())
            .base_layers(&active, self.settings.base_templates_path.clone())
            .await?;
        Ok(layers)
    }

    /// The catalog a full compile would use, without touching the output tree.
    pub async fn catalog(&self) -> ForumResult<PathCatalog> {
        let base_layers = self.base_layers().await?;
        self.merge_catalog(&base_layers).await
    }

    /// Rebuild every template into a freshly cleared output tree.
    pub async fn compile_all(&self) -> ForumResult<CompileReport> {
        let base_layers = self.base_layers().await?;

        self.prepare_output_dir().await?;

        tracing::info!("Compiling templates");
        let catalog = self.merge_catalog(&base_layers).await?;

        let compiled = try_join_all(
            catalog
                .iter()
                .map(|(template, entry)| self.compile_entry(&catalog, template, &entry.physical)),
        )
        .await?;

        let mut report = CompileReport {
            overrides: catalog.overrides().len(),
            ..CompileReport::default()
        };
        for (template, warnings) in compiled {
            report.warnings.extend(warnings);
            report.compiled.push(template);
        }

        tracing::info!(
            templates = report.template_count(),
            warnings = report.warnings.len(),
            "Successfully compiled templates."
        );
        Ok(report)
    }

    /// Recompile one template from already loaded `source`, resolving its
    /// imports against the existing output tree. Only the artifact is written.
    pub async fn compile_template(
        &self,
        filename: &str,
        source: String,
    ) -> ForumResult<CompileReport> {
        let template = TemplatePath::new(filename)?;
        let views_dir = &self.settings.views_dir;

        let catalog = catalog_from_output(self.fs.as_ref(), views_dir).await?;
        let expansion = self.expand(&catalog, &template, source).await?;
        let compiled = self.precompile(&template, &expansion.source).await?;

        let artifact = template.artifact_path().join_to(views_dir);
        self.ensure_parent(&artifact).await?;
        self.fs.write(&artifact, &compiled).await?;

        tracing::debug!(template = %template, artifact = %artifact.display(), "recompiled template");
        Ok(CompileReport {
            compiled: vec![CompiledTemplate {
                template,
                intermediate: None,
                artifact,
            }],
            warnings: expansion.warnings,
            overrides: 0,
        })
    }

    /// Remove stale output, recreate the directory, then fire the hook.
    /// Runs strictly before any template is read.
    async fn prepare_output_dir(&self) -> ForumResult<()> {
        let views_dir = &self.settings.views_dir;
        self.fs.remove_dir_all(views_dir).await?;
        self.fs.create_dir_all(views_dir).await?;
        self.plugins
            .fire_hook(PRECOMPILE_HOOK, serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn merge_catalog(&self, base_layers: &[TemplateRoot]) -> ForumResult<PathCatalog> {
        let plugin_templates = self.plugins.templates().await?;
        let core = TemplateRoot::new(
            TemplateSource::Core,
            self.settings.core_templates_path.clone(),
        );
        let catalog = build_catalog(self.fs.as_ref(), &core, base_layers, plugin_templates).await?;
        Ok(catalog)
    }

    async fn compile_entry(
        &self,
        catalog: &PathCatalog,
        template: &TemplatePath,
        physical: &Path,
    ) -> ForumResult<(CompiledTemplate, Vec<ImportWarning>)> {
        let raw = self.fs.read_to_string(physical).await?;
        let expansion = self.expand(catalog, template, raw).await?;

        let views_dir = &self.settings.views_dir;
        let intermediate = template.join_to(views_dir);
        let artifact = template.artifact_path().join_to(views_dir);
        self.ensure_parent(&intermediate).await?;

        let write_intermediate = async {
            self.fs.write(&intermediate, &expansion.source).await?;
            Ok::<(), ForumError>(())
        };
        let write_artifact = async {
            let compiled = self.precompile(template, &expansion.source).await?;
            self.fs.write(&artifact, &compiled).await?;
            Ok::<(), ForumError>(())
        };
        tokio::try_join!(write_intermediate, write_artifact)?;

        Ok((
            CompiledTemplate {
                template: template.clone(),
                intermediate: Some(intermediate),
                artifact,
            },
            expansion.warnings,
        ))
    }

    async fn expand(
        &self,
        catalog: &PathCatalog,
        template: &TemplatePath,
        source: String,
    ) -> ForumResult<Expansion> {
        let expansion = ImportExpander::new(catalog, self.fs.as_ref())
            .with_options(self.settings.expand)
            .expand(template, source)
            .await?;
        Ok(expansion)
    }

    async fn precompile(&self, template: &TemplatePath, source: &str) -> ForumResult<String> {
        let options = PrecompileOptions {
            minify: self.settings.minify(),
        };
        self.precompiler
            .precompile(source, options)
            .await
            .map_err(|source| ForumError::Precompile {
                template: template.clone(),
                source,
            })
    }

    async fn ensure_parent(&self, file: &Path) -> ForumResult<()> {
        if let Some(parent) = file.parent() {
            self.fs.create_dir_all(parent).await?;
        }
        Ok(())
    }
}
