//! Implementation of `gloss status`.

use std::process::ExitCode;

use gloss_config::{ConfigWarning, discover_config_files, is_global_config};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Shows configuration files, the glossary, and validation warnings.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() && ctx.glossary_path().is_none() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("gloss init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none)"));
    }
    for path in &config_files {
        let scope = if is_global_config(path) {
            "global"
        } else {
            "local"
        };
        println!("   {} {}", path.display(), dim(&format!("({scope})")));
    }
    println!();

    let mut config = ctx.config.clone();
    config.glossary.path = ctx.glossary_path().map(|p| p.to_path_buf());
    let warnings = config.validate();

    println!("{}", subheader("Glossary:"));
    match &config.glossary.path {
        None => println!("   {}", dim("(none configured)")),
        Some(path) if !path.is_file() => {
            println!("   {} {}", path.display(), warning("[missing]"));
        }
        Some(path) => {
            println!("   {}", path.display());
            match ctx.glossary() {
                Ok(glossary) => println!(
                    "   {}",
                    dim(&format!(
                        "{} entries, {} categories",
                        glossary.corpus.len(),
                        glossary.corpus.categories().len()
                    ))
                ),
                // the load error has already been printed
                Err(code) => return code,
            }
        }
    }
    println!();

    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoGlossaryConfigured => {
                println!("{}", dim("Hint: set [glossary] path in .gloss.toml"));
            }
            ConfigWarning::GlossaryMissing { .. } | ConfigWarning::GlossaryNotFile { .. } => {
                println!(
                    "{}",
                    dim("Hint: glossary paths are relative to the config file")
                );
            }
            _ => {}
        }
    }
}
