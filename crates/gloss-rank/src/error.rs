//! Error types for the ranking pipeline.

use std::fmt::Display;

use thiserror::Error;

/// Errors surfaced by a search.
///
/// Empty queries and searches without matches are not errors; see
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Error)]
pub enum RankError {
    /// The candidate index failed while answering a query variant.
    #[error("candidate index unavailable while searching '{query}': {message}")]
    IndexUnavailable {
        /// The query variant being searched when the index failed.
        query: String,
        /// The index's error message.
        message: String,
    },
}

impl RankError {
    /// Creates an `IndexUnavailable` error from the failing variant and index error.
    pub(crate) fn index_unavailable(query: &str, source: &impl Display) -> Self {
        Self::IndexUnavailable {
            query: query.to_string(),
            message: source.to_string(),
        }
    }
}
