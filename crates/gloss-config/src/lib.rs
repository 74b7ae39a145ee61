//! Configuration system for gloss.
//!
//! gloss uses TOML configuration files named `.gloss.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.gloss.toml` files found, then loading `~/.gloss.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawGlossarySettings, RawSearchSettings, RawSessionSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_glossary_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default maximum number of ranked results.
pub const DEFAULT_RESULT_LIMIT: usize = 15;

/// Default per-field candidate cap for the query as typed.
pub const DEFAULT_ORIGINAL_LIMIT: usize = 10;

/// Default per-field candidate cap for each generated variant.
pub const DEFAULT_VARIANT_LIMIT: usize = 5;

/// Default minimum query length (in characters) before variants are generated.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 3;

/// Default minimum word length (in characters) for stemming and transpositions.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Default upper bound on generated variants, original query included.
pub const DEFAULT_MAX_VARIANTS: usize = 32;

/// Default interactive debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Top-level merged configuration for gloss.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.gloss.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Glossary source settings.
    pub glossary: GlossarySettings,
    /// Ranking and retrieval settings.
    pub search: SearchSettings,
    /// Interactive session settings.
    pub session: SessionSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.gloss.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - No glossary configured
    /// - A glossary path that doesn't exist or isn't a file
    /// - Zero-valued limits that would make every search come back empty
    /// - A variant candidate cap larger than the original query's cap
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            glossary: SerializableGlossary {
                path: self
                    .glossary
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
            search: self.search.clone(),
            session: self.session.clone(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Where the glossary comes from.
#[derive(Debug, Clone, Default)]
pub struct GlossarySettings {
    /// Resolved absolute path to the glossary JSON file.
    pub path: Option<PathBuf>,
}

/// Ranking and retrieval settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of ranked results.
    pub limit: usize,
    /// Per-field candidate cap for the query as typed.
    pub original_limit: usize,
    /// Per-field candidate cap for each generated variant.
    pub variant_limit: usize,
    /// Queries shorter than this are not expanded.
    pub min_query_length: usize,
    /// Words shorter than this are not stemmed or transposed.
    pub min_word_length: usize,
    /// Upper bound on variants, original query included.
    pub max_variants: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULT_LIMIT,
            original_limit: DEFAULT_ORIGINAL_LIMIT,
            variant_limit: DEFAULT_VARIANT_LIMIT,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_variants: DEFAULT_MAX_VARIANTS,
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Glossary settings.
    glossary: SerializableGlossary,
    /// Search settings.
    search: SearchSettings,
    /// Session settings.
    session: SessionSettings,
}

/// Glossary settings with the path rendered as a string.
#[derive(Serialize)]
struct SerializableGlossary {
    /// Resolved glossary path, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.limit, 15);
        assert_eq!(search.original_limit, 10);
        assert_eq!(search.variant_limit, 5);
        assert_eq!(search.min_query_length, 3);
        assert_eq!(search.min_word_length, 4);
        assert_eq!(search.max_variants, 32);
    }

    #[test]
    fn test_session_settings_defaults() {
        assert_eq!(SessionSettings::default().debounce_ms, 150);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.glossary.path.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.glossary.path = Some(PathBuf::from("/data/glossary.json"));
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[glossary]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("[session]"));
        assert!(toml.contains("limit = 15"));
        assert!(toml.contains("debounce_ms = 150"));
        assert!(toml.contains("path = \"/data/glossary.json\""));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("search").is_some());
    }

    #[test]
    fn test_settings_to_toml_without_glossary() {
        let toml = Config::default().settings_to_toml().unwrap();
        assert!(!toml.contains("path ="));
    }
}
