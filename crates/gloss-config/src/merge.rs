//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules and resolving the glossary path.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, GlossarySettings, SearchSettings, SessionSettings,
    parse::{RawConfig, RawSearchSettings, RawSessionSettings},
    resolve::resolve_glossary_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// the working directory), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Glossary path: first defined value wins, resolved against the directory of the file
///   that defined it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let glossary = merge_glossary(configs)?;
    let search = merge_search_settings(configs);
    let session = merge_session_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        glossary,
        search,
        session,
        config_root,
    })
}

/// Picks the highest-precedence glossary path and resolves it.
fn merge_glossary(configs: &[ParsedConfig]) -> Result<GlossarySettings, ConfigError> {
    for parsed in configs {
        if let Some(path) = parsed
            .config
            .glossary
            .as_ref()
            .and_then(|g| g.path.as_deref())
        {
            return Ok(GlossarySettings {
                path: Some(resolve_glossary_path(path, parsed.dir())?),
            });
        }
    }
    Ok(GlossarySettings::default())
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.original_limit {
        result.original_limit = v;
    }
    if let Some(v) = raw.variant_limit {
        result.variant_limit = v;
    }
    if let Some(v) = raw.min_query_length {
        result.min_query_length = v;
    }
    if let Some(v) = raw.min_word_length {
        result.min_word_length = v;
    }
    if let Some(v) = raw.max_variants {
        result.max_variants = v;
    }
}

/// Merges session settings.
fn merge_session_settings(configs: &[ParsedConfig]) -> SessionSettings {
    let mut result = SessionSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref session) = parsed.config.session {
            apply_raw_session(&mut result, session);
        }
    }

    result
}

/// Applies raw session settings to result.
fn apply_raw_session(result: &mut SessionSettings, raw: &RawSessionSettings) {
    if let Some(v) = raw.debounce_ms {
        result.debounce_ms = v;
    }
}
