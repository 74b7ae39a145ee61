//! Glossary file parsing and load-time validation.
//!
//! Glossary files are JSON, either a bare array of entries or an object with a `terms`
//! array. Entries are parsed into intermediate `RawEntry` structures that keep every field
//! optional, then validated into [`GlossaryEntry`] values. Malformed entries are rejected
//! here so that ranking never has to defend against them.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
use tracing::debug;

use crate::{Corpus, CorpusError, GlossaryEntry};

/// Top-level shape of a glossary file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGlossary {
    /// `{ "terms": [ ... ] }`
    Wrapped {
        /// The entries.
        terms: Vec<RawEntry>,
    },
    /// `[ ... ]`
    Bare(Vec<RawEntry>),
}

impl RawGlossary {
    /// Unwraps the entry list regardless of file shape.
    fn into_entries(self) -> Vec<RawEntry> {
        match self {
            Self::Wrapped { terms } => terms,
            Self::Bare(terms) => terms,
        }
    }
}

/// A glossary entry exactly as written in the file.
///
/// List fields accept either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEntry {
    /// Canonical term.
    term: Option<String>,
    /// Definition text.
    definition: Option<String>,
    /// Classification label.
    category: Option<String>,
    /// Alternate names.
    #[serde_as(as = "OneOrMany<_>")]
    aliases: Vec<String>,
    /// Related term names.
    #[serde_as(as = "OneOrMany<_>")]
    related: Vec<String>,
    /// Documentation URLs.
    #[serde_as(as = "OneOrMany<_>")]
    docs: Vec<String>,
}

/// Loads and validates a glossary file from disk.
pub fn load_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let contents = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus = parse_corpus(&contents)?;
    debug!(path = %path.display(), entries = corpus.len(), "loaded glossary");
    Ok(corpus)
}

/// Parses and validates a glossary from a JSON string.
pub fn parse_corpus(contents: &str) -> Result<Corpus, CorpusError> {
    let raw: RawGlossary = serde_json::from_str(contents)?;
    let entries = validate_entries(raw.into_entries())?;
    Ok(Corpus::new(entries))
}

/// Validates raw entries, rejecting blank required fields and duplicate terms.
fn validate_entries(raw: Vec<RawEntry>) -> Result<Vec<GlossaryEntry>, CorpusError> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(raw.len());
    let mut entries = Vec::with_capacity(raw.len());

    for (position, entry) in raw.into_iter().enumerate() {
        let term = required(entry.term, position, "term")?;
        let definition = required(entry.definition, position, "definition")?;

        if let Some(&first) = seen.get(&term.to_lowercase()) {
            return Err(CorpusError::DuplicateTerm {
                term,
                first,
                second: position,
            });
        }
        seen.insert(term.to_lowercase(), position);

        entries.push(GlossaryEntry {
            term,
            definition,
            category: entry.category.map(|c| c.trim().to_string()).unwrap_or_default(),
            aliases: clean_list(entry.aliases),
            related: clean_list(entry.related),
            docs: clean_list(entry.docs),
        });
    }

    Ok(entries)
}

/// Returns the trimmed value of a required field, or a `MissingField` error.
fn required(
    value: Option<String>,
    position: usize,
    field: &'static str,
) -> Result<String, CorpusError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CorpusError::MissingField { position, field }),
    }
}

/// Trims list items and drops blank ones, preserving order.
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
