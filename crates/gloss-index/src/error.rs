//! Error types for the gloss-index crate.

use thiserror::Error;

/// Errors that can occur when building or querying the glossary index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to build the in-memory index.
    #[error("failed to build glossary index: {0}")]
    Build(String),

    /// A query pattern could not be compiled.
    #[error("invalid query pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Error message.
        message: String,
    },

    /// Failed to execute a search.
    #[error("failed to search {field}: {message}")]
    Search {
        /// Field being searched.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

impl IndexError {
    /// Creates a `Build` error from a Tantivy error.
    pub(crate) fn build(source: &tantivy::TantivyError) -> Self {
        Self::Build(source.to_string())
    }

    /// Creates a `Pattern` error from a Tantivy error.
    pub(crate) fn pattern(pattern: &str, source: &tantivy::TantivyError) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            message: source.to_string(),
        }
    }

    /// Creates a `Search` error from a Tantivy error.
    pub(crate) fn search(field: &'static str, source: &tantivy::TantivyError) -> Self {
        Self::Search {
            field,
            message: source.to_string(),
        }
    }
}
