//! Candidate retrieval.
//!
//! Fans every query variant out to a [`CandidateIndex`] and collects the per-field hit
//! sets into one flat candidate list. Nothing here scores or reorders; duplicates across
//! variants and fields are left for the merger to resolve.

use std::fmt;

use gloss_corpus::EntryId;
use serde::Serialize;
use tracing::trace;

use crate::error::RankError;

/// A field of a glossary entry that the candidate index can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// The entry's term.
    Term,
    /// The entry's definition text.
    Definition,
    /// The entry's aliases.
    Aliases,
    /// The entry's category label.
    Category,
}

impl SearchField {
    /// Every searchable field, in the order retrieval asks for them.
    pub const ALL: [Self; 4] = [Self::Term, Self::Definition, Self::Aliases, Self::Category];

    /// Field name as used by the index.
    pub fn name(self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Definition => "definition",
            Self::Aliases => "aliases",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entries one field matched for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHits {
    /// The field that matched.
    pub field: SearchField,
    /// Matching entries in index order.
    pub ids: Vec<EntryId>,
}

/// An external full-text index answering per-field candidate queries.
pub trait CandidateIndex {
    /// Error reported when the index cannot answer.
    type Error: fmt::Display;

    /// Searches `fields` for `query`, returning up to `limit` ids per field.
    ///
    /// Implementations return one [`FieldHits`] per requested field, even when the
    /// field has no hits.
    fn search(
        &self,
        query: &str,
        fields: &[SearchField],
        limit: usize,
    ) -> Result<Vec<FieldHits>, Self::Error>;
}

/// One retrieved hit, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Matched entry.
    pub id: EntryId,
    /// Field that produced the hit.
    pub field: SearchField,
    /// Position of the producing variant; 0 is the query as typed.
    pub variant: usize,
}

/// Per-field candidate caps.
///
/// The query as typed gets a larger cap than generated variants, which weights literal
/// matches higher in the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalLimits {
    /// Cap for the original query.
    pub original: usize,
    /// Cap for every generated variant.
    pub variant: usize,
}

impl RetrievalLimits {
    /// The cap that applies to the variant at `position`.
    fn for_variant(self, position: usize) -> usize {
        if position == 0 {
            self.original
        } else {
            self.variant
        }
    }
}

/// Queries `index` with every variant across all [`SearchField`]s.
///
/// Hits are returned variant by variant, field by field, in the order the index
/// reported them. The first index failure aborts retrieval.
pub fn retrieve<I>(
    index: &I,
    variants: &[String],
    limits: RetrievalLimits,
) -> Result<Vec<Candidate>, RankError>
where
    I: CandidateIndex + ?Sized,
{
    let mut candidates = Vec::new();

    for (position, variant) in variants.iter().enumerate() {
        let limit = limits.for_variant(position);
        let hits = index
            .search(variant, &SearchField::ALL, limit)
            .map_err(|e| RankError::index_unavailable(variant, &e))?;

        let before = candidates.len();
        for FieldHits { field, ids } in hits {
            candidates.extend(ids.into_iter().map(|id| Candidate {
                id,
                field,
                variant: position,
            }));
        }
        trace!(
            variant = %variant,
            limit,
            hits = candidates.len() - before,
            "retrieved variant"
        );
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every call and answers with a fixed hit per field.
    struct RecordingIndex {
        /// `(query, limit)` pairs in call order.
        calls: RefCell<Vec<(String, usize)>>,
    }

    impl CandidateIndex for RecordingIndex {
        type Error = String;

        fn search(
            &self,
            query: &str,
            fields: &[SearchField],
            limit: usize,
        ) -> Result<Vec<FieldHits>, String> {
            self.calls.borrow_mut().push((query.to_string(), limit));
            Ok(fields
                .iter()
                .enumerate()
                .map(|(i, &field)| FieldHits {
                    field,
                    ids: vec![EntryId::new(i)],
                })
                .collect())
        }
    }

    /// Fails for one specific query.
    struct FlakyIndex;

    impl CandidateIndex for FlakyIndex {
        type Error = String;

        fn search(&self, query: &str, _: &[SearchField], _: usize) -> Result<Vec<FieldHits>, String> {
            if query == "boom" {
                Err("reader closed".to_string())
            } else {
                Ok(vec![])
            }
        }
    }

    fn variants(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    const LIMITS: RetrievalLimits = RetrievalLimits {
        original: 10,
        variant: 5,
    };

    #[test]
    fn original_query_gets_the_larger_cap() {
        let index = RecordingIndex {
            calls: RefCell::new(vec![]),
        };
        retrieve(&index, &variants(&["wallets", "wallet", "awllets"]), LIMITS).unwrap();

        let calls = index.calls.into_inner();
        assert_eq!(
            calls,
            vec![
                ("wallets".to_string(), 10),
                ("wallet".to_string(), 5),
                ("awllets".to_string(), 5),
            ]
        );
    }

    #[test]
    fn hits_are_flattened_in_variant_then_field_order() {
        let index = RecordingIndex {
            calls: RefCell::new(vec![]),
        };
        let candidates = retrieve(&index, &variants(&["a", "b"]), LIMITS).unwrap();

        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0].field, SearchField::Term);
        assert_eq!(candidates[0].variant, 0);
        assert_eq!(candidates[3].field, SearchField::Category);
        assert_eq!(candidates[4].variant, 1);
        assert_eq!(candidates[4].id, EntryId::new(0));
    }

    #[test]
    fn index_failure_is_reported_with_the_variant() {
        let err = retrieve(&FlakyIndex, &variants(&["fine", "boom"]), LIMITS).unwrap_err();
        let RankError::IndexUnavailable { query, message } = err;
        assert_eq!(query, "boom");
        assert_eq!(message, "reader closed");
    }

    #[test]
    fn field_names_match_index_fields() {
        let names: Vec<_> = SearchField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["term", "definition", "aliases", "category"]);
        assert_eq!(SearchField::Aliases.to_string(), "aliases");
    }
}
