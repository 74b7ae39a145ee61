//! Merging retrieved candidates into one ranked list.
//!
//! Candidates arrive with duplicates across variants and fields. The merger keeps the
//! first occurrence of each entry, classifies and scores it against the original query,
//! lifts literal matches onto tier floors and orders the result.

use std::{cmp::Ordering, collections::HashSet};

use gloss_corpus::{Corpus, EntryId, GlossaryEntry};
use serde::Serialize;
use tracing::warn;

use crate::{
    retrieve::Candidate,
    score::{ScoreBreakdown, score_entry},
    verbatim::{MatchTier, classify},
};

/// Scores assigned to literal-match tiers.
///
/// Each floor is strictly greater than any score the tier below it can reach.
pub mod floors {
    /// Score of an exact term match.
    pub const EXACT_TERM: f64 = 2.0;
    /// Score of an exact alias match.
    pub const EXACT_ALIAS: f64 = 1.5;
    /// Base score of a word-in-term match.
    pub const WORD_IN_TERM: f64 = 1.05;
    /// Share of the raw score added on top of [`WORD_IN_TERM`].
    pub const WORD_IN_TERM_SPREAD: f64 = 0.1;
}

/// A ranked glossary entry.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry<'a> {
    /// Entry id.
    pub id: EntryId,
    /// The entry itself.
    #[serde(flatten)]
    pub entry: &'a GlossaryEntry,
    /// Verbatim tier.
    pub tier: MatchTier,
    /// Final score. Only comparable with entries ranked for the same query.
    pub score: f64,
    /// Raw sub-scores.
    pub breakdown: ScoreBreakdown,
}

/// Unique entry ids in first-seen order.
pub fn dedup_candidates(candidates: &[Candidate]) -> Vec<EntryId> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .map(|c| c.id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Deduplicates, scores and orders candidates, keeping at most `limit` results.
pub fn merge_candidates<'a>(
    candidates: &[Candidate],
    corpus: &'a Corpus,
    query: &str,
    limit: usize,
) -> Vec<ScoredEntry<'a>> {
    rank_entries(&dedup_candidates(candidates), corpus, query, limit)
}

/// Scores and orders already-deduplicated entries.
///
/// Ids the corpus does not know are skipped with a warning.
pub fn rank_entries<'a>(
    ids: &[EntryId],
    corpus: &'a Corpus,
    query: &str,
    limit: usize,
) -> Vec<ScoredEntry<'a>> {
    let mut buckets: [Vec<ScoredEntry<'a>>; 4] = Default::default();

    for &id in ids {
        let Some(entry) = corpus.get(id) else {
            warn!(%id, "candidate index returned an id outside the corpus");
            continue;
        };

        let tier = classify(entry, query);
        let breakdown = score_entry(entry, query);
        let scored = ScoredEntry {
            id,
            entry,
            tier,
            score: tier_score(tier, breakdown.total),
            breakdown,
        };
        buckets[bucket_index(tier)].push(scored);
    }

    let mut ranked: Vec<ScoredEntry<'a>> = buckets.into_iter().flatten().collect();
    ranked.sort_by(|a, b| compare_desc(a.score, b.score));
    ranked.truncate(limit);
    ranked
}

/// Final score for an entry in `tier` with raw score `raw`.
fn tier_score(tier: MatchTier, raw: f64) -> f64 {
    match tier {
        MatchTier::ExactTerm => floors::EXACT_TERM,
        MatchTier::ExactAlias => floors::EXACT_ALIAS,
        MatchTier::WordInTerm => floors::WORD_IN_TERM + raw * floors::WORD_IN_TERM_SPREAD,
        MatchTier::Unclassified => raw,
    }
}

/// Position of a tier's bucket in priority order.
fn bucket_index(tier: MatchTier) -> usize {
    match tier {
        MatchTier::ExactTerm => 0,
        MatchTier::ExactAlias => 1,
        MatchTier::WordInTerm => 2,
        MatchTier::Unclassified => 3,
    }
}

/// Orders scores from highest to lowest.
fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
