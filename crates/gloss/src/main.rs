//! Command-line interface for the `gloss` glossary search tool.

use std::process::ExitCode;

use gloss::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands, logging,
};

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    // init must work even when an existing config file is broken
    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(cli.glossary),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
