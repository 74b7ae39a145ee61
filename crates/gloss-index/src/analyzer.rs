//! Text analysis for the glossary index.
//!
//! Indexed text and query strings go through the same pipeline:
//! 1. `SimpleTokenizer` - splits on whitespace and punctuation
//! 2. `LowerCaser` - converts tokens to lowercase
//! 3. `AsciiFoldingFilter` - folds accented characters to ASCII
//! 4. `RemoveLongFilter` - removes tokens longer than 40 bytes
//!
//! There is no stemming: query variants already carry stems, and prefix matching
//! covers inflected forms.

use tantivy::tokenizer::{
    AsciiFoldingFilter, LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer, TokenStream,
};

/// Name of the custom tokenizer registered with Tantivy.
pub const GLOSS_TOKENIZER: &str = "gloss_text";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Builds the gloss text analyzer.
pub fn build_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .build()
}

/// Runs `text` through `analyzer`, returning the token texts in order.
pub fn tokenize(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut stream = analyzer.token_stream(text);
    stream.process(&mut |token| tokens.push(token.text.clone()));
    tokens
}

#[cfg(test)]
mod test {
    use super::*;

    fn analyze(text: &str) -> Vec<String> {
        tokenize(&mut build_analyzer(), text)
    }

    #[test]
    fn splits_and_lowercases() {
        assert_eq!(analyze("Smart-Contract Wallet"), vec!["smart", "contract", "wallet"]);
    }

    #[test]
    fn folds_accents() {
        assert_eq!(analyze("Café Naïve"), vec!["cafe", "naive"]);
    }

    #[test]
    fn drops_overlong_tokens() {
        let long = "a".repeat(50);
        assert_eq!(analyze(&format!("short {long}")), vec!["short"]);
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        assert!(analyze("?! -- ...").is_empty());
    }
}
