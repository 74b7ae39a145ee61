//! Implementation of `gloss ls`.

use std::process::ExitCode;

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use gloss_corpus::{Corpus, GlossaryEntry};

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
    output::dim,
};

/// Label shown for entries without a category.
const UNCATEGORIZED: &str = "(uncategorized)";

/// Lists terms or categories.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    let glossary = match ctx.glossary() {
        Ok(glossary) => glossary,
        Err(code) => return code,
    };

    match cmd.what {
        Some(LsWhat::Categories) => list_categories(&glossary.corpus),
        None => list_terms(&glossary.corpus, cmd.category.as_deref(), cmd.long),
    }
}

/// Lists categories with their entry counts.
fn list_categories(corpus: &Corpus) -> ExitCode {
    let categories = corpus.categories();
    if categories.is_empty() {
        println!("{}", dim("No entries."));
        return ExitCode::SUCCESS;
    }

    for (category, count) in categories {
        let label = if category.is_empty() {
            UNCATEGORIZED
        } else {
            category
        };
        println!("{label} {}", dim(&format!("({count})")));
    }
    ExitCode::SUCCESS
}

/// Lists terms in load order, optionally restricted to one category.
fn list_terms(corpus: &Corpus, category: Option<&str>, long: bool) -> ExitCode {
    let entries: Vec<&GlossaryEntry> = corpus
        .entries()
        .iter()
        .filter(|e| category.is_none_or(|c| e.category.eq_ignore_ascii_case(c)))
        .collect();

    if entries.is_empty() {
        println!("{}", dim("No entries."));
        return ExitCode::SUCCESS;
    }

    if long {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Term", "Category", "Aliases", "Definition"]);
        for entry in entries {
            table.add_row(vec![
                Cell::new(&entry.term),
                Cell::new(&entry.category),
                Cell::new(entry.aliases.join(", ")),
                Cell::new(&entry.definition),
            ]);
        }
        println!("{table}");
    } else {
        for entry in entries {
            if entry.category.is_empty() {
                println!("{}", entry.term);
            } else {
                println!("{} {}", entry.term, dim(&format!("({})", entry.category)));
            }
        }
    }
    ExitCode::SUCCESS
}
