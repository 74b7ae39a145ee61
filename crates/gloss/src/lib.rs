//! gloss: glossary search for the terminal.
//!
//! gloss looks up terms in a JSON glossary. Queries may be partial, misspelled or
//! pluralized; the ranking engine expands them into variants, gathers candidates from an
//! in-memory full-text index and orders the results so that literal matches always come
//! before fuzzy ones.

#![warn(missing_docs)]

pub mod cli;
