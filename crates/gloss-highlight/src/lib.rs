//! Terminal styling for gloss.
//!
//! Provides syntax-highlighted TOML for configuration output, ANSI helpers for headers
//! and status messages, and in-text emphasis of query matches in search results.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// A syntax highlighter for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Available color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the named syntax, falling back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings and query matches).
    pub const YELLOW: &str = "\x1b[33m";
    /// Magenta text (for match tiers).
    pub const MAGENTA: &str = "\x1b[35m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats a match-tier label as a bracketed magenta badge.
pub fn badge(label: &str) -> String {
    format!("{}[{}]{}", colors::MAGENTA, label, colors::RESET)
}

/// Formats a relevance score with two decimals, dimmed.
pub fn score(value: f64) -> String {
    dim(&format!("{value:.2}"))
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Emphasizes every case-insensitive occurrence of a query word in `text`.
///
/// Longer words win where several start at the same position. Text without matches
/// is returned unchanged.
pub fn emphasize(text: &str, query: &str) -> String {
    let needles: Vec<Vec<char>> = query
        .split_whitespace()
        .map(|w| w.chars().map(fold).collect())
        .collect();
    if needles.is_empty() {
        return text.to_string();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let matched = needles
            .iter()
            .filter(|n| starts_with_folded(&chars[i..], n))
            .map(Vec::len)
            .max();

        match matched {
            Some(len) => {
                let start = chars[i].0;
                let end = chars.get(i + len).map_or(text.len(), |(byte, _)| *byte);
                output.push_str(colors::BOLD);
                output.push_str(colors::YELLOW);
                output.push_str(&text[start..end]);
                output.push_str(colors::RESET);
                i += len;
            }
            None => {
                output.push(chars[i].1);
                i += 1;
            }
        }
    }

    output
}

/// Single-character case folding.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Returns true if `haystack` begins with `needle`, ignoring case.
fn starts_with_folded(haystack: &[(usize, char)], needle: &[char]) -> bool {
    haystack.len() >= needle.len()
        && haystack
            .iter()
            .zip(needle)
            .all(|((_, h), n)| fold(*h) == *n)
}
