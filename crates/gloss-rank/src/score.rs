//! Continuous relevance scoring.
//!
//! Each entry is scored against the original query as the sum of independent sub-scores,
//! clamped to [`weights::MAX_SCORE`]:
//!
//! - how closely the term matches (exact, prefix, whole word, substring)
//! - the share of query words that occur in the definition
//! - alias and related-term bonuses, which accumulate independently
//! - a cheap positional character similarity between term and query
//!
//! Scoring is total over well-formed entries and keeps every sub-score so results can be
//! explained.

use gloss_corpus::GlossaryEntry;
use serde::Serialize;

use crate::verbatim::term_words;

/// Scoring weights.
pub mod weights {
    /// Term equals the query.
    pub const EXACT_TERM: f64 = 1.0;
    /// Term starts with the query.
    pub const TERM_PREFIX: f64 = 0.9;
    /// A whole word of the term equals the query.
    pub const TERM_WORD: f64 = 0.85;
    /// Term contains the query.
    pub const TERM_SUBSTRING: f64 = 0.8;
    /// Scale for the fraction of query words found in the definition.
    pub const DEFINITION_OVERLAP: f64 = 0.6;
    /// Query words must be longer than this to count towards definition overlap.
    pub const OVERLAP_MIN_WORD_LENGTH: usize = 2;
    /// An alias equals the query.
    pub const ALIAS_EXACT: f64 = 0.4;
    /// An alias contains the query.
    pub const ALIAS_PARTIAL: f64 = 0.3;
    /// A related term equals the query.
    pub const RELATED_EXACT: f64 = 0.3;
    /// A related term contains the query.
    pub const RELATED_PARTIAL: f64 = 0.2;
    /// Scale for character similarity.
    pub const FUZZY: f64 = 0.4;
    /// Length difference above which similarity is not computed.
    pub const FUZZY_MAX_LENGTH_GAP: usize = 5;
    /// Similarity assigned when the length difference is too large.
    pub const FUZZY_GAP_SIMILARITY: f64 = 0.1;
    /// Upper bound of the combined score.
    pub const MAX_SCORE: f64 = 1.0;
}

/// Sub-scores of one entry against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Term match contribution.
    pub term: f64,
    /// Definition word-overlap contribution.
    pub definition: f64,
    /// Alias bonus.
    pub alias: f64,
    /// Related-term bonus.
    pub related: f64,
    /// Weighted character similarity.
    pub fuzzy: f64,
    /// Sum of the above, clamped to [`weights::MAX_SCORE`].
    pub total: f64,
}

/// Scores `entry` against `query`, ignoring case.
pub fn score_entry(entry: &GlossaryEntry, query: &str) -> ScoreBreakdown {
    let query = query.to_lowercase();
    let term = entry.term.to_lowercase();

    let term_score = term_match(&term, &query);
    let definition = definition_overlap(&entry.definition.to_lowercase(), &query);
    let alias = label_bonus(
        &entry.aliases,
        &query,
        weights::ALIAS_EXACT,
        weights::ALIAS_PARTIAL,
    );
    let related = label_bonus(
        &entry.related,
        &query,
        weights::RELATED_EXACT,
        weights::RELATED_PARTIAL,
    );
    let fuzzy = character_similarity(&term, &query) * weights::FUZZY;

    let total = (term_score + definition + alias + related + fuzzy).min(weights::MAX_SCORE);

    ScoreBreakdown {
        term: term_score,
        definition,
        alias,
        related,
        fuzzy,
        total,
    }
}

/// Strongest applicable term match weight, or zero.
fn term_match(term: &str, query: &str) -> f64 {
    if term == query {
        weights::EXACT_TERM
    } else if term.starts_with(query) {
        weights::TERM_PREFIX
    } else if term_words(term).any(|w| w == query) {
        weights::TERM_WORD
    } else if term.contains(query) {
        weights::TERM_SUBSTRING
    } else {
        0.0
    }
}

/// Weighted fraction of query words that occur in the definition.
///
/// Short words never count as found but still count toward the total.
fn definition_overlap(definition: &str, query: &str) -> f64 {
    let total = query.split_whitespace().count();
    if total == 0 {
        return 0.0;
    }

    let found = query
        .split_whitespace()
        .filter(|w| w.chars().count() > weights::OVERLAP_MIN_WORD_LENGTH)
        .filter(|w| definition.contains(*w))
        .count();
    found as f64 / total as f64 * weights::DEFINITION_OVERLAP
}

/// Bonus for a list of labels: `exact` if one equals the query, `partial` if one
/// contains it.
fn label_bonus(labels: &[String], query: &str, exact: f64, partial: f64) -> f64 {
    let lowered: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
    if lowered.iter().any(|l| l == query) {
        exact
    } else if lowered.iter().any(|l| l.contains(query)) {
        partial
    } else {
        0.0
    }
}

/// Positional character similarity in `[0, 1]`.
///
/// Counts characters that are equal at the same index and divides by the longer
/// length. Strings whose lengths differ by more than
/// [`weights::FUZZY_MAX_LENGTH_GAP`] get [`weights::FUZZY_GAP_SIMILARITY`].
/// This is not an edit distance: an insertion near the start shifts every later
/// character out of alignment.
pub fn character_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > weights::FUZZY_MAX_LENGTH_GAP {
        return weights::FUZZY_GAP_SIMILARITY;
    }

    let longer = a.len().max(b.len());
    if longer == 0 {
        return 1.0;
    }

    let aligned = a.iter().zip(&b).filter(|(x, y)| x == y).count();
    aligned as f64 / longer as f64
}
