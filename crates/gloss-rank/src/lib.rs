//! Relevance ranking for gloss.
//!
//! Turns a raw, possibly misspelled query into a deduplicated, tier-ordered list of
//! glossary entries:
//! - Query normalization and expansion into variants (stems, transpositions, stop-word
//!   removal)
//! - Candidate retrieval through any [`CandidateIndex`]
//! - Verbatim tier classification and continuous scoring against the original query
//! - Merging into one capped, ordered result list
//!
//! Literal matches always outrank fuzzy ones: exact term, exact alias and word-in-term
//! matches are lifted onto fixed tier floors before sorting.
//!
//! # Example
//!
//! ```
//! use gloss_corpus::{Corpus, EntryId, GlossaryEntry};
//! use gloss_rank::{CandidateIndex, FieldHits, SearchField, SearchParams, search};
//!
//! /// Returns every entry for every field.
//! struct Everything(usize);
//!
//! impl CandidateIndex for Everything {
//!     type Error = String;
//!
//!     fn search(&self, _: &str, fields: &[SearchField], limit: usize) -> Result<Vec<FieldHits>, String> {
//!         let ids: Vec<_> = (0..self.0.min(limit)).map(EntryId::new).collect();
//!         Ok(fields.iter().map(|&field| FieldHits { field, ids: ids.clone() }).collect())
//!     }
//! }
//!
//! let corpus = Corpus::new(vec![GlossaryEntry {
//!     term: "AO".into(),
//!     definition: "Actor Oriented compute".into(),
//!     category: "compute".into(),
//!     aliases: vec!["ao process".into()],
//!     related: vec![],
//!     docs: vec![],
//! }]);
//!
//! let outcome = search("ao", &corpus, &Everything(corpus.len()), &SearchParams::default()).unwrap();
//! assert_eq!(outcome.results()[0].entry.term, "AO");
//! ```

#![warn(missing_docs)]

mod error;
mod expand;
mod merge;
mod normalize;
mod pipeline;
mod retrieve;
mod score;
mod session;
mod verbatim;

pub use error::RankError;
pub use expand::{ExpandOptions, STOP_WORDS, expand_query};
pub use merge::{ScoredEntry, dedup_candidates, floors, merge_candidates, rank_entries};
pub use normalize::normalize_query;
pub use pipeline::{
    SearchOutcome, SearchParams, SearchReport, SearchTrace, search, search_with_trace,
};
pub use retrieve::{Candidate, CandidateIndex, FieldHits, RetrievalLimits, SearchField, retrieve};
pub use score::{ScoreBreakdown, character_similarity, score_entry, weights};
pub use session::{Debouncer, Generation, SearchSession};
pub use verbatim::{MatchTier, classify};
