//! Tantivy-backed candidate index for gloss.
//!
//! Builds an in-memory index over a [`Corpus`](gloss_corpus::Corpus) and answers the
//! ranking pipeline's per-field candidate queries through
//! [`CandidateIndex`](gloss_rank::CandidateIndex). Query tokens match indexed tokens
//! they are a prefix of, so partially typed words still find their entries.
//!
//! # Example
//!
//! ```
//! use gloss_corpus::parse_corpus;
//! use gloss_index::GlossaryIndex;
//! use gloss_rank::{SearchParams, search};
//!
//! let corpus = parse_corpus(
//!     r#"[{"term": "Bundler", "definition": "Packages data items for upload"}]"#,
//! )
//! .unwrap();
//! let index = GlossaryIndex::build(&corpus).unwrap();
//!
//! let outcome = search("bundl", &corpus, &index, &SearchParams::default()).unwrap();
//! assert_eq!(outcome.results()[0].entry.term, "Bundler");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod index;
mod schema;

pub use analyzer::{GLOSS_TOKENIZER, build_analyzer, tokenize};
pub use error::IndexError;
pub use index::GlossaryIndex;
pub use schema::GlossarySchema;
