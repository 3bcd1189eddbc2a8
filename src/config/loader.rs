//! Configuration loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::{ConfigWarning, Environment};
use crate::error::{ForumError, ForumResult};

use super::types::Config;

pub const ENV_RUNTIME: &str = "FORUM_ENV";
pub const ENV_VIEWS_DIR: &str = "FORUM_VIEWS_DIR";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ForumResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ForumError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `path` when present, otherwise defaults. Paths from the file resolve
/// against the config file's directory, paths from `FORUM_*` variables against
/// the working directory.
pub fn load_or_default(path: &Path) -> ForumResult<(Config, Vec<ConfigWarning>)> {
    let cwd = std::env::current_dir()?;

    let (config, warnings) = if path.exists() {
        load_with_warnings(path)?
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        (Config::default(), Vec::new())
    };

    let config = resolve(config, path, &cwd, |key| std::env::var(key).ok());
    Ok((config, warnings))
}

/// Make every path absolute: file values against the directory of
/// `config_path`, then environment overrides against `cwd`.
pub fn resolve<F>(config: Config, config_path: &Path, cwd: &Path, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let config_dir = match config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    };

    with_env_overrides(config.resolve_paths(&config_dir), lookup).resolve_paths(cwd)
}

/// Apply environment variable overrides (FORUM_* prefix)
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(env) = lookup(ENV_RUNTIME) {
        config.runtime.env = Environment::from_name(&env);
    }

    if let Some(dir) = lookup(ENV_VIEWS_DIR).filter(|d| !d.trim().is_empty()) {
        config.paths.views_dir = dir.into();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}
