//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use gloss_corpus::GlossaryEntry;
pub use gloss_highlight::{dim, header, subheader, success, warning};
use gloss_highlight::{badge, emphasize, rule, score};
use gloss_rank::{ScoredEntry, SearchOutcome, SearchTrace};
use serde::Serialize;

/// Width of the separator printed under the explain header.
const RULE_WIDTH: usize = 60;

/// JSON output for `gloss search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'q, 'a> {
    /// The query as typed.
    pub query: &'q str,
    /// `matches`, `no_matches` or `empty_query`.
    pub outcome: &'static str,
    /// Number of results returned.
    pub total_matches: usize,
    /// Ranked results.
    pub results: &'q [ScoredEntry<'a>],
    /// Intermediate steps, present with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<&'q SearchTrace>,
}

/// Machine-readable name of an outcome.
pub fn outcome_name(outcome: &SearchOutcome<'_>) -> &'static str {
    match outcome {
        SearchOutcome::EmptyQuery => "empty_query",
        SearchOutcome::NoMatches => "no_matches",
        SearchOutcome::Matches(_) => "matches",
    }
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders a search outcome for the terminal.
pub fn render_outcome(outcome: &SearchOutcome<'_>, query: &str) -> String {
    match outcome {
        SearchOutcome::EmptyQuery => format!("{}\n", dim("Type a query to search.")),
        SearchOutcome::NoMatches => format!("{}\n", dim("No results found.")),
        SearchOutcome::Matches(results) => render_results(results, query),
    }
}

/// Renders ranked results, one block per entry.
pub fn render_results(results: &[ScoredEntry<'_>], query: &str) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {} {}\n",
            emphasize(&result.entry.term, query),
            badge(result.tier.label()),
            score(result.score)
        ));
        out.push_str(&render_body(result.entry, query));
    }
    out
}

/// Renders a single entry in full, as shown by `gloss get`.
pub fn render_entry(entry: &GlossaryEntry) -> String {
    let mut out = format!("{}\n", header(&entry.term));
    if !entry.category.is_empty() {
        out.push_str(&format!("{}\n", dim(&entry.category)));
    }
    out.push('\n');
    out.push_str(&format!("{}\n", entry.definition));

    let lists = [
        ("Aliases", &entry.aliases),
        ("Related", &entry.related),
        ("Docs", &entry.docs),
    ];
    for (label, values) in lists {
        if !values.is_empty() {
            out.push_str(&format!("\n{}\n", subheader(&format!("{label}:"))));
            for value in values {
                out.push_str(&format!("  {value}\n"));
            }
        }
    }
    out
}

/// Renders the query trace and the score breakdown of each result.
pub fn render_explain(trace: &SearchTrace, results: &[ScoredEntry<'_>]) -> String {
    let mut out = format!("{}\n{}\n", subheader("Search explain"), rule(RULE_WIDTH));
    out.push_str(&format!("query:       {}\n", trace.query));
    out.push_str(&format!("variants:    {}\n", trace.variants.len()));
    for variant in &trace.variants {
        out.push_str(&format!("  {}\n", dim(variant)));
    }
    out.push_str(&format!("candidates:  {}\n", trace.candidates));
    out.push_str(&format!("unique:      {}\n", trace.unique));

    if !results.is_empty() {
        out.push_str(&format!("\n{}\n", subheader("Breakdown")));
    }
    for result in results {
        let b = &result.breakdown;
        out.push_str(&format!(
            "  {:<28} {:<13} {:>5.2}  term {:.2}  def {:.2}  alias {:.2}  related {:.2}  \
             fuzzy {:.2}  raw {:.2}\n",
            result.entry.term,
            result.tier.label(),
            result.score,
            b.term,
            b.definition,
            b.alias,
            b.related,
            b.fuzzy,
            b.total
        ));
    }
    out
}

/// Definition and aliases under a result heading.
fn render_body(entry: &GlossaryEntry, query: &str) -> String {
    let mut out = format!("  {}\n", emphasize(&entry.definition, query));
    if !entry.aliases.is_empty() {
        out.push_str(&format!("  {}\n", dim(&format!("aka {}", entry.aliases.join(", ")))));
    }
    out
}

#[cfg(test)]
mod tests {
    use gloss_corpus::{Corpus, EntryId};
    use gloss_rank::{MatchTier, ScoreBreakdown};

    use super::*;

    fn corpus() -> Corpus {
        Corpus::new(vec![GlossaryEntry {
            term: "Bundler".into(),
            definition: "Groups data items into one transaction".into(),
            category: "infrastructure".into(),
            aliases: vec!["bundling service".into()],
            related: vec!["ANS-104".into()],
            docs: vec![],
        }])
    }

    fn scored(corpus: &Corpus) -> ScoredEntry<'_> {
        let id = EntryId::new(0);
        ScoredEntry {
            id,
            entry: &corpus.entries()[0],
            tier: MatchTier::ExactTerm,
            score: 2.0,
            breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn results_show_tier_score_and_aliases() {
        let corpus = corpus();
        let rendered = render_results(&[scored(&corpus)], "bundler");
        assert!(rendered.contains("[exact term]"));
        assert!(rendered.contains("2.00"));
        assert!(rendered.contains("aka bundling service"));
    }

    #[test]
    fn empty_outcomes_have_messages() {
        assert!(render_outcome(&SearchOutcome::NoMatches, "x").contains("No results found."));
        assert!(render_outcome(&SearchOutcome::EmptyQuery, "").contains("Type a query"));
    }

    #[test]
    fn entry_detail_lists_related_terms() {
        let corpus = corpus();
        let rendered = render_entry(&corpus.entries()[0]);
        assert!(rendered.contains("Related:"));
        assert!(rendered.contains("ANS-104"));
        assert!(!rendered.contains("Docs:"));
    }

    #[test]
    fn explain_lists_variants() {
        let trace = SearchTrace {
            query: "bundlers".into(),
            variants: vec!["bundlers".into(), "bundler".into()],
            candidates: 3,
            unique: 1,
        };
        let rendered = render_explain(&trace, &[]);
        assert!(rendered.contains("variants:    2"));
        assert!(rendered.contains("bundler"));
        assert!(!rendered.contains("Breakdown"));
    }

    #[test]
    fn json_omits_trace_unless_requested() {
        let corpus = corpus();
        let results = [scored(&corpus)];
        let output = JsonSearchOutput {
            query: "bundler",
            outcome: "matches",
            total_matches: 1,
            results: &results,
            trace: None,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["results"][0]["term"], "Bundler");
        assert!(json.get("trace").is_none());
    }
}
