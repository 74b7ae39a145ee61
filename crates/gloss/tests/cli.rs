//! CLI integration tests for gloss commands.
//!
//! These tests focus on exit codes, result order and JSON shape rather than exact
//! terminal formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const GLOSSARY: &str = r#"[
  {
    "term": "Bundler",
    "definition": "A service that groups data items into a single transaction",
    "category": "infrastructure",
    "aliases": ["bundling service"],
    "related": ["ANS-104"]
  },
  {
    "term": "Wallet",
    "definition": "Software that holds the private keys used to sign transactions",
    "category": "identity",
    "aliases": ["keyfile"]
  },
  {
    "term": "AO",
    "definition": "Actor Oriented compute",
    "category": "compute",
    "aliases": ["ao process"]
  },
  {
    "term": "Smart Contract",
    "definition": "Code whose state transitions are enforced by the network",
    "category": "compute"
  },
  {
    "term": "Proof of Work",
    "definition": "Consensus reached by spending computation",
    "category": "consensus"
  }
]"#;

/// A project directory with a glossary, plus a separate isolated HOME.
struct Fixture {
    /// Project directory used as the working directory.
    project: TempDir,
    /// Directory used as HOME.
    home: TempDir,
}

impl Fixture {
    /// Creates both directories and writes the glossary into the project.
    fn new() -> Self {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(project.path().join("glossary.json"), GLOSSARY).unwrap();
        Self { project, home }
    }

    /// Same as [`Fixture::new`], with a `.gloss.toml` pointing at the glossary.
    fn configured() -> Self {
        let fixture = Self::new();
        fs::write(
            fixture.project.path().join(".gloss.toml"),
            "[glossary]\npath = \"glossary.json\"\n",
        )
        .unwrap();
        fixture
    }

    /// A command running in the project directory.
    fn cmd(&self) -> Command {
        gloss_in(self.project.path(), self.home.path())
    }

    /// A command with `--glossary` passed explicitly.
    fn with_glossary(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--glossary", "glossary.json"]);
        cmd
    }
}

/// Helper to get a gloss command running in `cwd` with HOME isolated to `home`.
fn gloss_in(cwd: &Path, home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gloss").unwrap();
    cmd.current_dir(cwd).env("HOME", home).env_remove("GLOSS_LOG");
    cmd
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Runs a command expecting success and parses stdout as JSON.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

/// Terms of the results in a search JSON document, in order.
fn result_terms(json: &Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["term"].as_str().unwrap().to_string())
        .collect()
}

mod search {
    use super::*;

    #[test]
    fn exact_term_is_first() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .args(["search", "wallet"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let text = strip_ansi(&String::from_utf8(output).unwrap());
        let first = text.lines().next().unwrap();
        assert_eq!(first, "Wallet [exact term] 2.00");
    }

    #[test]
    fn json_output_has_tiers_and_scores() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["search", "AO", "--json"]));

        assert_eq!(json["outcome"], "matches");
        assert_eq!(json["query"], "AO");
        assert_eq!(json["results"][0]["term"], "AO");
        assert_eq!(json["results"][0]["tier"], "exact_term");
        assert_eq!(json["results"][0]["score"], 2.0);
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn multi_word_query_matches_alias() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args([
            "search",
            "bundling",
            "service",
            "--json",
        ]));

        assert_eq!(json["results"][0]["term"], "Bundler");
        assert_eq!(json["results"][0]["tier"], "exact_alias");
    }

    #[test]
    fn plural_finds_singular() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["search", "wallets", "--json"]));
        assert!(result_terms(&json).contains(&"Wallet".to_string()));
    }

    #[test]
    fn transposed_letters_are_forgiven() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["search", "wlalet", "--json"]));
        assert!(result_terms(&json).contains(&"Wallet".to_string()));
    }

    #[test]
    fn word_in_term_ranks_below_exact() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["search", "work", "--json"]));
        assert_eq!(json["results"][0]["term"], "Proof of Work");
        assert_eq!(json["results"][0]["tier"], "word_in_term");
    }

    #[test]
    fn limit_truncates_results() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args([
            "search",
            "transactions",
            "-n",
            "1",
            "--json",
        ]));
        assert_eq!(json["total_matches"], 1);
        assert_eq!(json["results"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["search", "wallet", "-n", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("limit must be at least 1"));
    }

    #[test]
    fn empty_query_succeeds_without_results() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["search", " .! ", "--json"]));
        assert_eq!(json["outcome"], "empty_query");
        assert_eq!(json["total_matches"], 0);
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["search", "zzzzzz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn explain_includes_trace() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args([
            "search",
            "wallets",
            "--json",
            "--explain",
        ]));
        let variants = json["trace"]["variants"].as_array().unwrap();
        assert_eq!(variants[0], "wallets");
        assert!(variants.iter().any(|v| v == "wallet"));
        assert!(json["trace"]["unique"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn explain_prints_breakdown() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["search", "wallet", "--explain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Breakdown"))
            .stdout(predicate::str::contains("variants:"));
    }

    #[test]
    fn uses_configured_glossary() {
        let fixture = Fixture::configured();
        let json = json_output(fixture.cmd().args(["search", "bundler", "--json"]));
        assert_eq!(json["results"][0]["term"], "Bundler");
    }

    #[test]
    fn fails_without_glossary() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["search", "wallet"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no glossary configured"));
    }

    #[test]
    fn fails_on_invalid_glossary() {
        let fixture = Fixture::new();
        fs::write(fixture.project.path().join("broken.json"), "{ not json").unwrap();
        fixture
            .cmd()
            .args(["--glossary", "broken.json", "search", "wallet"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load glossary"));
    }
}

mod get {
    use super::*;

    #[test]
    fn finds_by_alias() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .args(["get", "keyfile"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(text.starts_with("Wallet\n"));
        assert!(text.contains("private keys"));
    }

    #[test]
    fn json_includes_all_fields() {
        let fixture = Fixture::new();
        let json = json_output(fixture.with_glossary().args(["get", "bundler", "--json"]));
        assert_eq!(json["term"], "Bundler");
        assert_eq!(json["related"][0], "ANS-104");
        assert_eq!(json["docs"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn unknown_term_fails() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["get", "nothing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry named 'nothing'"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_terms_in_order() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .arg("ls")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = strip_ansi(&String::from_utf8(output).unwrap());
        let terms: Vec<&str> = text
            .lines()
            .map(|l| l.split(" (").next().unwrap())
            .collect();
        assert_eq!(
            terms,
            vec!["Bundler", "Wallet", "AO", "Smart Contract", "Proof of Work"]
        );
    }

    #[test]
    fn filters_by_category() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["ls", "--category", "compute"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Smart Contract"))
            .stdout(predicate::str::contains("Wallet").not());
    }

    #[test]
    fn long_listing_shows_definitions() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["ls", "-l"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Definition"))
            .stdout(predicate::str::contains("Actor Oriented compute"));
    }

    #[test]
    fn lists_categories_with_counts() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .args(["ls", "categories"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(text.contains("compute (2)"));
        assert!(text.contains("identity (1)"));
    }
}

mod repl {
    use super::*;

    #[test]
    fn searches_last_line_before_eof() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .args(["repl", "--debounce-ms", "5000"])
            .write_stdin("bundler\nwallet\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let text = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(text.contains("Wallet [exact term]"));
        assert!(!text.contains("Bundler [exact term]"));
    }

    #[test]
    fn searches_after_quiet_period() {
        let fixture = Fixture::new();
        fixture
            .with_glossary()
            .args(["repl", "--debounce-ms", "0"])
            .write_stdin("ao\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("exact term"));
    }

    #[test]
    fn blank_line_clears_pending_query() {
        let fixture = Fixture::new();
        let output = fixture
            .with_glossary()
            .args(["repl", "--debounce-ms", "5000"])
            .write_stdin("wallet\n   \n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let text = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(!text.contains("Wallet"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let fixture = Fixture::new();
        fixture.cmd().arg("init").assert().success();

        let contents = fs::read_to_string(fixture.project.path().join(".gloss.toml")).unwrap();
        assert!(contents.contains("[glossary]"));
        assert!(contents.contains("debounce_ms"));
    }

    #[test]
    fn initialized_project_is_searchable() {
        let fixture = Fixture::new();
        fixture.cmd().arg("init").assert().success();

        let json = json_output(fixture.cmd().args(["search", "bundler", "--json"]));
        assert_eq!(json["results"][0]["term"], "Bundler");
    }

    #[test]
    fn fails_if_config_exists() {
        let fixture = Fixture::configured();
        fixture
            .cmd()
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites() {
        let fixture = Fixture::configured();
        fixture.cmd().args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(fixture.project.path().join(".gloss.toml")).unwrap();
        assert!(contents.contains("max_variants"));
    }

    #[test]
    fn global_writes_to_home() {
        let fixture = Fixture::new();
        fixture.cmd().args(["init", "--global"]).assert().success();
        assert!(fixture.home.path().join(".gloss.toml").exists());
        assert!(!fixture.project.path().join(".gloss.toml").exists());
    }

    #[test]
    fn works_with_broken_config() {
        let fixture = Fixture::new();
        fs::write(fixture.project.path().join(".gloss.toml"), "not [valid").unwrap();
        fixture.cmd().args(["init", "--force"]).assert().success();
    }
}

mod status {
    use super::*;

    #[test]
    fn without_config_suggests_init() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("gloss init"));
    }

    #[test]
    fn healthy_config_reports_entries() {
        let fixture = Fixture::configured();
        fixture
            .cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("5 entries, 4 categories"))
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn missing_glossary_is_a_warning() {
        let fixture = Fixture::new();
        fs::write(
            fixture.project.path().join(".gloss.toml"),
            "[glossary]\npath = \"missing.json\"\n",
        )
        .unwrap();
        fixture
            .cmd()
            .arg("status")
            .assert()
            .failure()
            .stdout(predicate::str::contains("[missing]"))
            .stdout(predicate::str::contains("glossary does not exist"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_effective_settings() {
        let fixture = Fixture::configured();
        let output = fixture
            .cmd()
            .arg("config")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let text = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(text.contains("[search]"));
        assert!(text.contains("limit = 15"));
        assert!(text.contains("debounce_ms = 150"));
    }

    #[test]
    fn invalid_config_fails() {
        let fixture = Fixture::new();
        fs::write(fixture.project.path().join(".gloss.toml"), "not [valid").unwrap();
        fixture
            .cmd()
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}
