//! The search pipeline.
//!
//! `normalize -> expand -> retrieve -> merge`, as a plain function of the query, the
//! corpus and the candidate index. There is no ambient state; interactive front ends
//! layer [`SearchSession`](crate::SearchSession) on top for last-query-wins bookkeeping.

use gloss_config::{
    DEFAULT_ORIGINAL_LIMIT, DEFAULT_RESULT_LIMIT, DEFAULT_VARIANT_LIMIT, SearchSettings,
};
use gloss_corpus::Corpus;
use serde::Serialize;
use tracing::debug;

use crate::{
    error::RankError,
    expand::{ExpandOptions, expand_query},
    merge::{ScoredEntry, dedup_candidates, rank_entries},
    normalize::normalize_query,
    retrieve::{CandidateIndex, RetrievalLimits, retrieve},
};

/// Tunables for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of ranked results.
    pub limit: usize,
    /// Per-field candidate caps.
    pub retrieval: RetrievalLimits,
    /// Query expansion options.
    pub expand: ExpandOptions,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RESULT_LIMIT,
            retrieval: RetrievalLimits {
                original: DEFAULT_ORIGINAL_LIMIT,
                variant: DEFAULT_VARIANT_LIMIT,
            },
            expand: ExpandOptions::default(),
        }
    }
}

impl From<&SearchSettings> for SearchParams {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            limit: settings.limit,
            retrieval: RetrievalLimits {
                original: settings.original_limit,
                variant: settings.variant_limit,
            },
            expand: ExpandOptions::from(settings),
        }
    }
}

/// Successful result of a search.
#[derive(Debug, Clone)]
pub enum SearchOutcome<'a> {
    /// The query was empty after normalization; nothing was searched.
    EmptyQuery,
    /// The search ran and nothing matched.
    NoMatches,
    /// Ranked results, best first. Never empty.
    Matches(Vec<ScoredEntry<'a>>),
}

impl<'a> SearchOutcome<'a> {
    /// Ranked results; empty for `EmptyQuery` and `NoMatches`.
    pub fn results(&self) -> &[ScoredEntry<'a>] {
        match self {
            Self::Matches(results) => results,
            Self::EmptyQuery | Self::NoMatches => &[],
        }
    }

    /// Consumes the outcome, returning the ranked results.
    pub fn into_results(self) -> Vec<ScoredEntry<'a>> {
        match self {
            Self::Matches(results) => results,
            Self::EmptyQuery | Self::NoMatches => Vec::new(),
        }
    }
}

/// How a search arrived at its outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchTrace {
    /// The normalized query.
    pub query: String,
    /// Variants sent to the index, original first.
    pub variants: Vec<String>,
    /// Candidate hits before deduplication.
    pub candidates: usize,
    /// Distinct entries among the candidates.
    pub unique: usize,
}

/// A search outcome together with its trace.
#[derive(Debug, Clone)]
pub struct SearchReport<'a> {
    /// The outcome.
    pub outcome: SearchOutcome<'a>,
    /// The trace.
    pub trace: SearchTrace,
}

/// Runs a search for `raw_query` against `corpus`, retrieving candidates from `index`.
///
/// Returns [`SearchOutcome::EmptyQuery`] without touching the index when the query
/// normalizes to nothing. Index failures surface as [`RankError::IndexUnavailable`]
/// and never produce a partial list.
pub fn search<'a, I>(
    raw_query: &str,
    corpus: &'a Corpus,
    index: &I,
    params: &SearchParams,
) -> Result<SearchOutcome<'a>, RankError>
where
    I: CandidateIndex + ?Sized,
{
    search_with_trace(raw_query, corpus, index, params).map(|report| report.outcome)
}

/// Like [`search`], also returning the intermediate steps.
pub fn search_with_trace<'a, I>(
    raw_query: &str,
    corpus: &'a Corpus,
    index: &I,
    params: &SearchParams,
) -> Result<SearchReport<'a>, RankError>
where
    I: CandidateIndex + ?Sized,
{
    let query = normalize_query(raw_query);
    if query.is_empty() {
        debug!("empty query, skipping search");
        return Ok(SearchReport {
            outcome: SearchOutcome::EmptyQuery,
            trace: SearchTrace::default(),
        });
    }

    let variants = expand_query(&query, &params.expand);
    debug!(query = %query, variants = variants.len(), "expanded query");

    let candidates = retrieve(index, &variants, params.retrieval)?;
    let unique = dedup_candidates(&candidates);
    let ranked = rank_entries(&unique, corpus, &query, params.limit);
    debug!(
        candidates = candidates.len(),
        unique = unique.len(),
        results = ranked.len(),
        "merged candidates"
    );

    let outcome = if ranked.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(ranked)
    };

    Ok(SearchReport {
        outcome,
        trace: SearchTrace {
            candidates: candidates.len(),
            unique: unique.len(),
            query,
            variants,
        },
    })
}
