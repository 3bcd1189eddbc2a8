//! Logical Template Path Value Object
//!
//! A template's identity independent of which root provides it:
//! - Always POSIX-style with exactly one leading slash (`/partials/topic.tpl`)
//! - No traversal components (..)
//! - Non-empty

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Extension of template sources
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// Extension of compiled artifacts
pub const ARTIFACT_EXTENSION: &str = "js";

/// Error when a logical path cannot be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplatePathError {
    #[error("template path is empty")]
    Empty,

    #[error("template path '{0}' contains traversal components (..)")]
    ContainsTraversal(String),

    #[error("'{path}' is not inside '{root}'")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// A normalized logical template path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplatePath(String);

impl TemplatePath {
    /// Normalize a raw logical path (`partial.tpl`, `/partial.tpl`, `a\\b.tpl`).
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TemplatePathError> {
        let raw = raw.as_ref().trim().replace('\\', "/");

        let segments: Vec<&str> = raw
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        if segments.is_empty() {
            return Err(TemplatePathError::Empty);
        }
        if segments.contains(&"..") {
            return Err(TemplatePathError::ContainsTraversal(raw));
        }

        Ok(Self(format!("/{}", segments.join("/"))))
    }

    /// Build the logical path of `file` by stripping the `root` prefix.
    pub fn from_physical(root: &Path, file: &Path) -> Result<Self, TemplatePathError> {
        let relative = file
            .strip_prefix(root)
            .map_err(|_| TemplatePathError::OutsideRoot {
                path: file.to_path_buf(),
                root: root.to_path_buf(),
            })?;

        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        Self::new(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path below an output root (no leading slash).
    pub fn to_relative(&self) -> PathBuf {
        PathBuf::from(&self.0[1..])
    }

    /// Logical path of the compiled artifact (`.tpl` replaced by `.js`).
    pub fn artifact_path(&self) -> TemplatePath {
        let suffix = format!(".{}", TEMPLATE_EXTENSION);
        match self.0.strip_suffix(&suffix) {
            Some(stem) => TemplatePath(format!("{}.{}", stem, ARTIFACT_EXTENSION)),
            None => TemplatePath(format!("{}.{}", self.0, ARTIFACT_EXTENSION)),
        }
    }

    /// Resolve this logical path below a physical root.
    pub fn join_to(&self, root: &Path) -> PathBuf {
        root.join(self.to_relative())
    }
}

impl fmt::Display for TemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TemplatePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
