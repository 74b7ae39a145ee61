//! Error types for glossary loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a glossary.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read the glossary file.
    #[error("failed to read glossary {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The glossary is not valid JSON or does not have the expected shape.
    #[error("failed to parse glossary: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry is missing a required field or has it blank.
    #[error("entry {position} is missing a {field}")]
    MissingField {
        /// Zero-based position of the entry in the file.
        position: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Two entries share the same term (compared case-insensitively).
    #[error("duplicate term '{term}' at entries {first} and {second}")]
    DuplicateTerm {
        /// The duplicated term, as written in the second entry.
        term: String,
        /// Position of the first entry with this term.
        first: usize,
        /// Position of the duplicate.
        second: usize,
    },
}
