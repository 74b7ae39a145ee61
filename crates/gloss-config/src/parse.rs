//! Configuration file parsing.
//!
//! Parses individual `.gloss.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Glossary section.
    pub glossary: Option<RawGlossarySettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Session settings section.
    pub session: Option<RawSessionSettings>,
}

/// Raw glossary settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawGlossarySettings {
    /// Path to the glossary JSON, relative to the config file's directory.
    pub path: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Maximum number of ranked results.
    pub limit: Option<usize>,
    /// Per-field candidate cap for the query as typed.
    pub original_limit: Option<usize>,
    /// Per-field candidate cap for each variant.
    pub variant_limit: Option<usize>,
    /// Minimum query length for expansion.
    pub min_query_length: Option<usize>,
    /// Minimum word length for stemming and transpositions.
    pub min_word_length: Option<usize>,
    /// Upper bound on variants.
    pub max_variants: Option<usize>,
}

/// Raw session settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSessionSettings {
    /// Debounce window in milliseconds.
    pub debounce_ms: Option<u64>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
