//! Implementation of `gloss config`.

use std::process::ExitCode;

use gloss_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Prints the effective settings as highlighted TOML.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: failed to serialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", Highlighter::new().highlight_toml(&toml));
    ExitCode::SUCCESS
}
