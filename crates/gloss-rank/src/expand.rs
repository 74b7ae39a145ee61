//! Query expansion.
//!
//! Generates alternative spellings of a query to widen recall from the candidate index:
//! naive suffix stemming, adjacent-character transpositions, punctuation stripping and
//! stop-word removal. Expansion is a pure function of the query and the options.
//!
//! Variants are produced in decreasing order of usefulness (cleaned full queries, then
//! stems and stripped words, then transpositions) so that the variant cap drops typo
//! guesses first.

use std::collections::HashSet;

use gloss_config::{
    DEFAULT_MAX_VARIANTS, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_MIN_WORD_LENGTH, SearchSettings,
};

/// Words removed from multi-word queries.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "in", "on", "at", "to", "for", "with", "by", "as", "of",
];

/// Stems shorter than this many characters are discarded.
const MIN_STEM_LENGTH: usize = 3;

/// Words stripped of punctuation must be longer than this to be kept.
const MIN_STRIPPED_LENGTH: usize = 2;

/// Tunables for [`expand_query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Queries shorter than this (in characters) are returned unexpanded.
    pub min_query_length: usize,
    /// Words shorter than this are not stemmed or transposed.
    pub min_word_length: usize,
    /// Maximum number of variants returned, original query included.
    pub max_variants: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_variants: DEFAULT_MAX_VARIANTS,
        }
    }
}

impl From<&SearchSettings> for ExpandOptions {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            min_query_length: settings.min_query_length,
            min_word_length: settings.min_word_length,
            max_variants: settings.max_variants,
        }
    }
}

/// Ordered, case-insensitively deduplicated collection of variants.
struct VariantSet {
    /// Variants in insertion order.
    variants: Vec<String>,
    /// Lowercased variants already present.
    seen: HashSet<String>,
}

impl VariantSet {
    /// Starts a set containing only the original query.
    fn new(original: &str) -> Self {
        let mut set = Self {
            variants: Vec::new(),
            seen: HashSet::new(),
        };
        set.push(original.to_string());
        set
    }

    /// Adds a variant unless it is empty or already present.
    fn push(&mut self, variant: String) {
        if !variant.is_empty() && self.seen.insert(variant.to_lowercase()) {
            self.variants.push(variant);
        }
    }
}

/// Expands a normalized, non-empty query into a list of variants.
///
/// The original query is always the first element. Words are lowercased and split on
/// whitespace; each word at least `min_word_length` characters long contributes its
/// stems, its punctuation-stripped form and its adjacent transpositions. For multi-word
/// queries every word variant is also substituted back into the full query, and a
/// stop-word-free, punctuation-free rendition of the whole query is added.
pub fn expand_query(query: &str, options: &ExpandOptions) -> Vec<String> {
    let mut set = VariantSet::new(query);

    if query.chars().count() < options.min_query_length {
        return set.variants;
    }

    let lower = query.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let multi_word = words.len() > 1;

    if multi_word {
        let kept: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| !STOP_WORDS.contains(w))
            .collect();
        if kept.len() != words.len() {
            set.push(kept.join(" "));
        }

        let cleaned: Vec<String> = kept
            .iter()
            .map(|w| strip_non_alphanumeric(w))
            .filter(|w| !w.is_empty())
            .collect();
        set.push(cleaned.join(" "));
    }

    let eligible: Vec<(usize, &str)> = words
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, w)| w.chars().count() >= options.min_word_length)
        .collect();

    for &(position, word) in &eligible {
        let mut forms = stems(word);
        let stripped = strip_non_alphanumeric(word);
        if stripped != word && stripped.chars().count() > MIN_STRIPPED_LENGTH {
            forms.push(stripped);
        }
        push_word_forms(&mut set, &words, position, forms, multi_word);
    }

    for &(position, word) in &eligible {
        push_word_forms(&mut set, &words, position, transpositions(word), multi_word);
    }

    let mut variants = set.variants;
    variants.truncate(options.max_variants.max(1));
    variants
}

/// Adds each form of the word at `position`, substituted into the full query first.
fn push_word_forms(
    set: &mut VariantSet,
    words: &[&str],
    position: usize,
    forms: Vec<String>,
    multi_word: bool,
) {
    for form in forms {
        if multi_word {
            set.push(substitute(words, position, &form));
        }
        set.push(form);
    }
}

/// Rebuilds the query with the word at `position` replaced by `form`.
fn substitute(words: &[&str], position: usize, form: &str) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| if i == position { form } else { *w })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Naive English suffix stripping.
///
/// - `-ing`: strip 3, and strip 3 then append `e`
/// - `-ed`: strip 2, and strip 1
/// - `-ies`: strip 3 then append `y`
/// - `-es`: strip 2, and strip 1
/// - `-s` (but not `-ss`): strip 1
fn stems(word: &str) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(base) = word.strip_suffix("ing") {
        out.push(base.to_string());
        out.push(format!("{base}e"));
    } else if let Some(base) = word.strip_suffix("ed") {
        out.push(base.to_string());
        out.push(format!("{base}e"));
    } else if let Some(base) = word.strip_suffix("ies") {
        out.push(format!("{base}y"));
    } else if let Some(base) = word.strip_suffix("es") {
        out.push(base.to_string());
        out.push(format!("{base}e"));
    } else if let Some(base) = word.strip_suffix('s')
        && !base.ends_with('s')
    {
        out.push(base.to_string());
    }

    out.retain(|s| s.chars().count() >= MIN_STEM_LENGTH);
    out
}

/// All single adjacent-character swaps of `word`, skipping swaps of equal characters.
fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len().saturating_sub(1))
        .filter(|&i| chars[i] != chars[i + 1])
        .map(|i| {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect()
        })
        .collect()
}

/// Removes every non-alphanumeric character.
fn strip_non_alphanumeric(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}
