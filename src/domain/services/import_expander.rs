//! Import expander
//!
//! Inlines `<!-- IMPORT path -->` directives, one at a time, until none remain.
//! Unresolvable directives are stripped with a warning.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::PathCatalog;
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::TemplatePath;

static IMPORT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- IMPORT (.+?) -->").expect("import directive pattern is valid")
});

/// Default bound on inlined partials per template.
pub const DEFAULT_MAX_IMPORTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Inlining more partials than this for one template is treated as an
    /// import cycle.
    pub max_imports: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            max_imports: DEFAULT_MAX_IMPORTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportWarningKind {
    /// The partial is not in the catalog
    UnknownPartial,
    /// The template imports itself
    SelfImport,
}

/// A directive that was stripped instead of inlined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    pub template: TemplatePath,
    pub partial: String,
    pub kind: ImportWarningKind,
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            ImportWarningKind::UnknownPartial => "unknown partial",
            ImportWarningKind::SelfImport => "self import",
        };
        write!(
            f,
            "Partial not loaded: {} (in {}, {})",
            self.partial, self.template, reason
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub source: String,
    pub warnings: Vec<ImportWarning>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read partial {partial} for {template}: {source}")]
    ReadPartial {
        template: TemplatePath,
        partial: TemplatePath,
        #[source]
        source: FsError,
    },

    #[error("{template} inlined more than {limit} partials; check for an import cycle")]
    ImportLimitExceeded { template: TemplatePath, limit: usize },
}

pub struct ImportExpander<'a> {
    catalog: &'a PathCatalog,
    fs: &'a dyn FileSystem,
    options: ExpandOptions,
}

impl<'a> ImportExpander<'a> {
    pub fn new(catalog: &'a PathCatalog, fs: &'a dyn FileSystem) -> Self {
        Self {
            catalog,
            fs,
            options: ExpandOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExpandOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve every directive in `source`, which belongs to `template`.
    pub async fn expand(
        &self,
        template: &TemplatePath,
        mut source: String,
    ) -> Result<Expansion, ImportError> {
        let mut warnings = Vec::new();
        let mut inlined = 0usize;

        loop {
            let Some(captures) = IMPORT_DIRECTIVE.captures(&source) else {
                break;
            };
            let directive = captures.get(0).map_or(0..0, |m| m.range());
            let raw = captures.get(1).map_or("", |m| m.as_str()).trim().to_string();

            let replacement = match self.resolve(template, &raw) {
                Ok((partial, physical)) => {
                    if inlined == self.options.max_imports {
                        return Err(ImportError::ImportLimitExceeded {
                            template: template.clone(),
                            limit: self.options.max_imports,
                        });
                    }
                    inlined += 1;

                    self.fs
                        .read_to_string(physical)
                        .await
                        .map_err(|source| ImportError::ReadPartial {
                            template: template.clone(),
                            partial,
                            source,
                        })?
                }
                Err(kind) => {
                    let warning = ImportWarning {
                        template: template.clone(),
                        partial: raw,
                        kind,
                    };
                    tracing::warn!("{}", warning);
                    warnings.push(warning);
                    String::new()
                }
            };

            source.replace_range(directive, &replacement);
        }

        Ok(Expansion { source, warnings })
    }

    fn resolve(
        &self,
        template: &TemplatePath,
        raw: &str,
    ) -> Result<(TemplatePath, &'a std::path::Path), ImportWarningKind> {
        let partial = TemplatePath::new(raw).map_err(|_| ImportWarningKind::UnknownPartial)?;
        if &partial == template {
            return Err(ImportWarningKind::SelfImport);
        }
        let catalog: &'a PathCatalog = self.catalog;
        match catalog.physical(&partial) {
            Some(physical) => Ok((partial, physical)),
            None => Err(ImportWarningKind::UnknownPartial),
        }
    }
}

/// Whether `source` still contains an import directive.
pub fn has_import_directive(source: &str) -> bool {
    IMPORT_DIRECTIVE.is_match(source)
}
