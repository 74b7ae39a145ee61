//! Glossary entries for gloss.
//!
//! This crate owns the immutable vocabulary that every search runs against:
//! - [`GlossaryEntry`] records and their stable [`EntryId`] ordinals
//! - JSON loading with load-time validation ([`load_corpus`], [`parse_corpus`])
//! - Case-insensitive lookups by term, alias and category
//! - Cross-reference context between entries ([`build_context_map`])
//!
//! A [`Corpus`] is loaded once and never mutated afterwards.

#![warn(missing_docs)]

mod context;
mod error;
mod load;

use std::{collections::BTreeMap, fmt};

pub use context::{build_context_map, context_text};
pub use error::CorpusError;
pub use load::{load_corpus, parse_corpus};
use serde::Serialize;

/// Stable ordinal of an entry, assigned in file order at load time.
///
/// This is the join key between candidate retrieval and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(usize);

impl EntryId {
    /// Creates an id from a zero-based position.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based position.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single glossary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// Canonical display term, unique case-insensitively.
    pub term: String,
    /// Definition text.
    pub definition: String,
    /// Classification label (empty when the source has none).
    pub category: String,
    /// Alternate names for the term.
    pub aliases: Vec<String>,
    /// Names of related terms. Not validated against the corpus.
    pub related: Vec<String>,
    /// Documentation URLs.
    pub docs: Vec<String>,
}

/// The loaded, read-only set of glossary entries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Entries in load order; position is the [`EntryId`].
    entries: Vec<GlossaryEntry>,
}

impl Corpus {
    /// Wraps already-validated entries.
    pub fn new(entries: Vec<GlossaryEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&GlossaryEntry> {
        self.entries.get(id.index())
    }

    /// Iterates entries with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &GlossaryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (EntryId::new(i), e))
    }

    /// Finds an entry whose term or one of whose aliases equals `name`, ignoring case.
    ///
    /// Term matches win over alias matches.
    pub fn find(&self, name: &str) -> Option<(EntryId, &GlossaryEntry)> {
        let needle = name.trim().to_lowercase();
        self.iter()
            .find(|(_, e)| e.term.to_lowercase() == needle)
            .or_else(|| {
                self.iter()
                    .find(|(_, e)| e.aliases.iter().any(|a| a.to_lowercase() == needle))
            })
    }

    /// Returns category labels with their entry counts, sorted by label.
    pub fn categories(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
