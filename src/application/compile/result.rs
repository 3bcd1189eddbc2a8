//! Compile Result
//!
//! Result types for compile operations.

use std::path::PathBuf;

use crate::domain::services::ImportWarning;
use crate::domain::value_objects::TemplatePath;

/// Files produced for one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    pub template: TemplatePath,
    /// Import-expanded source (full compiles only)
    pub intermediate: Option<PathBuf>,
    pub artifact: PathBuf,
}

/// Result of a compile operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    /// Compiled templates in logical path order
    pub compiled: Vec<CompiledTemplate>,
    /// Import directives stripped instead of inlined
    pub warnings: Vec<ImportWarning>,
    /// Catalog entries that shadowed a lower-priority layer
    pub overrides: usize,
}

impl CompileReport {
    pub fn template_count(&self) -> usize {
        self.compiled.len()
    }

    /// Every file written, intermediates before artifacts per template.
    pub fn written(&self) -> Vec<PathBuf> {
        self.compiled
            .iter()
            .flat_map(|c| c.intermediate.iter().chain(std::iter::once(&c.artifact)))
            .cloned()
            .collect()
    }
}
