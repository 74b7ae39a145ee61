//! Path resolution for the glossary setting.
//!
//! Resolves relative and tilde-prefixed glossary paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a glossary path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/glossary.json`) - expanded to home directory
/// - Relative paths (`./data/glossary.json`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// Existing files are canonicalized. A missing file is not an error here; validation
/// reports it so that `gloss status` can still show the rest of the configuration.
pub fn resolve_glossary_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
