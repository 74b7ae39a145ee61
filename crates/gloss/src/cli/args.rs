//! Clap argument definitions for the `gloss` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Parses a result limit, which must be at least 1.
fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "gloss")]
#[command(about = "Glossary search - find terms even when you misspell them")]
pub struct Cli {
    /// Glossary JSON file, overriding the configured path
    #[arg(long, global = true, value_name = "PATH")]
    pub glossary: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `gloss search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to return [default: 15]
    #[arg(short = 'n', long, value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show query variants, candidate counts and per-result score breakdowns
    #[arg(long)]
    pub explain: bool,
}

impl SearchCommand {
    /// The query as a single string.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `gloss get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Term or alias to look up (case-insensitive)
    #[arg(required = true)]
    pub term: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl GetCommand {
    /// The name as a single string.
    pub fn name(&self) -> String {
        self.term.join(" ")
    }
}

/// Arguments for `gloss ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show aliases and definitions in a table
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Only list entries in this category
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// What to list instead of terms.
    #[command(subcommand)]
    pub what: Option<LsWhat>,
}

/// Arguments for `gloss repl`.
#[derive(Args, Debug, Clone)]
pub struct ReplCommand {
    /// Maximum results per query [default: 15]
    #[arg(short = 'n', long, value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// Quiet period after the last line before searching, in milliseconds [default: 150]
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Arguments for `gloss init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.gloss.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `gloss` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the glossary
    #[command(after_help = "\
RANKING:
  Results are grouped by how literally they match, strongest first:
    exact term       the query is the term
    exact alias      the query is one of the aliases
    word in term     the query is one whole word of the term
    fuzzy            everything else, by relevance score

  Queries are expanded with plural/singular forms, typo variants and
  stop-word-free forms, so 'wallets', 'walet' and 'the wallet' all find
  'Wallet'.

EXAMPLES:
  gloss search bundler
  gloss search 'proof of work'
  gloss search walets --explain
  gloss search ao -n 5 --json")]
    Search(SearchCommand),

    /// Show one entry by term or alias
    Get(GetCommand),

    /// Search interactively, one query per line
    Repl(ReplCommand),

    /// List terms or categories
    Ls(LsCommand),

    /// Initialize gloss configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

/// What to list with `gloss ls`.
#[derive(Clone, Copy, Subcommand, Debug)]
pub enum LsWhat {
    /// List categories with entry counts
    Categories,
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with hierarchical subcommand display.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: gloss [--glossary PATH] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for nested in sub.get_subcommands().filter(|c| c.get_name() != "help") {
            let nested_about = nested
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {:12} {nested_about}", nested.get_name());
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("      --glossary <PATH>  Glossary JSON file, overriding the configured path");
    println!("  -h, --help             Print help");
}
