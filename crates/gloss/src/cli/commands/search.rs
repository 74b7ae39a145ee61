//! Implementation of `gloss search`.

use std::process::ExitCode;

use gloss_rank::search_with_trace;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonSearchOutput, outcome_name, print_json, render_explain, render_outcome},
};

/// Runs a single search and prints the ranked results.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let glossary = match ctx.glossary() {
        Ok(glossary) => glossary,
        Err(code) => return code,
    };
    let params = ctx.search_params(cmd.limit);
    let query = cmd.query_text();

    let report = match search_with_trace(&query, &glossary.corpus, &glossary.index, &params) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let results = report.outcome.results();

    if cmd.json {
        return print_json(&JsonSearchOutput {
            query: &query,
            outcome: outcome_name(&report.outcome),
            total_matches: results.len(),
            results,
            trace: cmd.explain.then_some(&report.trace),
        });
    }

    if cmd.explain {
        println!("{}", render_explain(&report.trace, results));
    }
    print!("{}", render_outcome(&report.outcome, &query));
    ExitCode::SUCCESS
}
