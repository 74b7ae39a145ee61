//! Verbatim match tiers.

use gloss_corpus::GlossaryEntry;
use serde::Serialize;

/// Discrete priority bucket for literal matches.
///
/// Variants are declared in priority order, so the derived `Ord` sorts the strongest
/// tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// The query equals the term.
    ExactTerm,
    /// The query equals one of the aliases.
    ExactAlias,
    /// The query equals one whole word of the term.
    WordInTerm,
    /// No literal match.
    Unclassified,
}

impl MatchTier {
    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::ExactTerm => "exact term",
            Self::ExactAlias => "exact alias",
            Self::WordInTerm => "word in term",
            Self::Unclassified => "fuzzy",
        }
    }
}

/// Classifies how literally `query` matches `entry`, ignoring case.
///
/// Checks run in priority order and the first match wins.
pub fn classify(entry: &GlossaryEntry, query: &str) -> MatchTier {
    let query = query.to_lowercase();
    let term = entry.term.to_lowercase();

    if term == query {
        MatchTier::ExactTerm
    } else if entry.aliases.iter().any(|a| a.to_lowercase() == query) {
        MatchTier::ExactAlias
    } else if term_words(&term).any(|w| w == query) {
        MatchTier::WordInTerm
    } else {
        MatchTier::Unclassified
    }
}

/// Splits a term into words on hyphens and whitespace.
pub fn term_words(term: &str) -> impl Iterator<Item = &str> {
    term.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}
