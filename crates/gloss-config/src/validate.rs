//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No glossary path is configured.
    NoGlossaryConfigured,
    /// The glossary path does not exist.
    GlossaryMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The glossary path exists but is not a file.
    GlossaryNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// A limit is zero, so searches would never return anything.
    ZeroLimit {
        /// Name of the setting.
        setting: &'static str,
    },
    /// Variants may contribute more candidates than the query as typed.
    VariantLimitExceedsOriginal {
        /// Configured variant cap.
        variant_limit: usize,
        /// Configured original-query cap.
        original_limit: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGlossaryConfigured => write!(f, "no glossary path is configured"),
            Self::GlossaryMissing { path } => write!(f, "glossary does not exist: {path}"),
            Self::GlossaryNotFile { path } => write!(f, "glossary is not a file: {path}"),
            Self::ZeroLimit { setting } => {
                write!(f, "search.{setting} is 0; searches will return nothing")
            }
            Self::VariantLimitExceedsOriginal {
                variant_limit,
                original_limit,
            } => write!(
                f,
                "search.variant_limit ({variant_limit}) exceeds search.original_limit \
                 ({original_limit}); variants will outweigh the query as typed"
            ),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match &config.glossary.path {
        None => warnings.push(ConfigWarning::NoGlossaryConfigured),
        Some(path) if !path.exists() => warnings.push(ConfigWarning::GlossaryMissing {
            path: path.display().to_string(),
        }),
        Some(path) if !path.is_file() => warnings.push(ConfigWarning::GlossaryNotFile {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    let search = &config.search;
    for (setting, value) in [
        ("limit", search.limit),
        ("original_limit", search.original_limit),
        ("max_variants", search.max_variants),
    ] {
        if value == 0 {
            warnings.push(ConfigWarning::ZeroLimit { setting });
        }
    }

    if search.variant_limit > search.original_limit {
        warnings.push(ConfigWarning::VariantLimitExceedsOriginal {
            variant_limit: search.variant_limit,
            original_limit: search.original_limit,
        });
    }

    warnings
}
