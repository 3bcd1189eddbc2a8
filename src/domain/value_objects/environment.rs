//! Runtime Environment Value Object
//!
//! Decides whether compiled artifacts are minified.

use serde::{Deserialize, Serialize};

/// Runtime environment the forum runs in
///
/// - `Development`: artifacts stay readable
/// - `Production`: artifacts are minified (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Any name other than `development` counts as a production-like environment.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn minify(self) -> bool {
        self != Environment::Development
    }
}
