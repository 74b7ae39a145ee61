//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use gloss_config::Config;
use gloss_corpus::{Corpus, load_corpus};
use gloss_index::GlossaryIndex;
use gloss_rank::SearchParams;
use tracing::debug;

/// A loaded glossary together with its search index.
pub struct Glossary {
    /// Where the glossary was loaded from.
    pub path: PathBuf,
    /// The entries.
    pub corpus: Corpus,
    /// Full-text index over the entries.
    pub index: GlossaryIndex,
}

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Glossary path given on the command line.
    glossary_override: Option<PathBuf>,
    /// Glossary loaded for this invocation.
    glossary: Option<Arc<Glossary>>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(glossary_override: Option<PathBuf>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            glossary_override: glossary_override.map(|p| cwd.join(p)),
            cwd,
            config,
            glossary: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            glossary_override: None,
            glossary: None,
        })
    }

    /// The glossary path in effect: the `--glossary` flag, else the configured path.
    pub fn glossary_path(&self) -> Option<&Path> {
        self.glossary_override
            .as_deref()
            .or(self.config.glossary.path.as_deref())
    }

    /// Search parameters from the configuration, with an optional result limit override.
    pub fn search_params(&self, limit: Option<usize>) -> SearchParams {
        let mut params = SearchParams::from(&self.config.search);
        if let Some(limit) = limit {
            params.limit = limit;
        }
        params
    }

    /// Returns the glossary, loading it and building the index on first use.
    pub fn glossary(&mut self) -> Result<Arc<Glossary>, ExitCode> {
        if let Some(glossary) = &self.glossary {
            return Ok(Arc::clone(glossary));
        }

        let Some(path) = self.glossary_path().map(Path::to_path_buf) else {
            eprintln!("error: no glossary configured");
            eprintln!("Run 'gloss init' to create a configuration file, or pass --glossary PATH.");
            return Err(ExitCode::FAILURE);
        };

        let glossary = Arc::new(load_glossary(path)?);
        self.glossary = Some(Arc::clone(&glossary));
        Ok(glossary)
    }
}

/// Reads the glossary at `path` and indexes it.
fn load_glossary(path: PathBuf) -> Result<Glossary, ExitCode> {
    let corpus = load_corpus(&path).map_err(|e| {
        eprintln!("error: failed to load glossary: {e}");
        ExitCode::FAILURE
    })?;
    let index = GlossaryIndex::build(&corpus).map_err(|e| {
        eprintln!("error: failed to build index: {e}");
        ExitCode::FAILURE
    })?;
    debug!(path = %path.display(), entries = corpus.len(), "glossary loaded");

    Ok(Glossary {
        path,
        corpus,
        index,
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
