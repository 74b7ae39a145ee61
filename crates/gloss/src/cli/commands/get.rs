//! Implementation of `gloss get`.

use std::process::ExitCode;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{print_json, render_entry},
};

/// Prints the entry whose term or alias matches the argument.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let glossary = match ctx.glossary() {
        Ok(glossary) => glossary,
        Err(code) => return code,
    };
    let name = cmd.name();

    let Some((_, entry)) = glossary.corpus.find(&name) else {
        eprintln!("error: no entry named '{name}'");
        eprintln!("Try 'gloss search {name}' for similar terms.");
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return print_json(entry);
    }

    print!("{}", render_entry(entry));
    ExitCode::SUCCESS
}
