//! Query normalization.
//!
//! Cleans raw user input before it reaches expansion or retrieval. Normalization is
//! idempotent: normalizing an already-normalized query returns it unchanged.

/// Characters stripped from the end of a query.
const TRAILING_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')', '\'', '"',
];

/// Normalizes a raw query string.
///
/// - Trailing punctuation from a fixed set is removed; interior punctuation is kept
/// - Runs of whitespace collapse to a single space
/// - Leading and trailing whitespace is removed
///
/// Trailing punctuation and whitespace are stripped together, so `"wallet. ."` becomes
/// `"wallet"` in one pass. An empty result means there is no query to run.
pub fn normalize_query(raw: &str) -> String {
    let stripped =
        raw.trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c));
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
