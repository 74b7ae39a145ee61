//! Cross-reference context between glossary entries.
//!
//! An entry's context is the list of other terms that either mention it in their
//! definition or are mentioned by its own definition. Indexers append this context to the
//! searchable definition text so that a query for one term also surfaces the entries
//! that talk about it.

use crate::{Corpus, EntryId};

/// Builds the cross-reference context for every entry, indexed by [`EntryId`].
///
/// Matching is a case-insensitive substring test, so short terms may pick up incidental
/// matches. Each related term appears at most once per entry, in corpus order.
pub fn build_context_map(corpus: &Corpus) -> Vec<Vec<String>> {
    let lowered: Vec<(String, String)> = corpus
        .iter()
        .map(|(_, e)| (e.term.to_lowercase(), e.definition.to_lowercase()))
        .collect();

    corpus
        .iter()
        .map(|(id, entry)| {
            let (term, definition) = &lowered[id.index()];
            corpus
                .iter()
                .filter(|(other_id, _)| *other_id != id)
                .filter(|(other_id, _)| {
                    let (other_term, other_definition) = &lowered[other_id.index()];
                    other_term != term
                        && (other_definition.contains(term.as_str())
                            || definition.contains(other_term.as_str()))
                })
                .map(|(_, other)| other.term.clone())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Returns the context for a single entry as space-joined text.
pub fn context_text(context: &[Vec<String>], id: EntryId) -> String {
    context.get(id.index()).map(|c| c.join(" ")).unwrap_or_default()
}
