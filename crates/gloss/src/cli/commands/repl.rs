//! Implementation of `gloss repl`.
//!
//! Reads one query per line from stdin. Lines arriving in quick succession are debounced
//! so that only the last one is searched, and each search runs on the blocking pool
//! under a session ticket. Results whose ticket has been superseded by the time they
//! arrive are discarded, so output always reflects the most recent query.

use std::{process::ExitCode, sync::Arc, time::Duration};

use gloss_rank::{Debouncer, Generation, SearchParams, SearchSession, normalize_query, search};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    runtime::Builder,
    sync::mpsc,
    task,
    time::{Instant, sleep_until},
};
use tracing::debug;

use crate::cli::{
    args::ReplCommand,
    context::{CommandContext, Glossary},
    output::{dim, render_outcome},
};

/// A finished search: its ticket and either rendered output or an error message.
type Finished = (Generation, Result<String, String>);

/// Runs the interactive loop until stdin is closed.
pub fn run(ctx: &mut CommandContext, cmd: &ReplCommand) -> ExitCode {
    let glossary = match ctx.glossary() {
        Ok(glossary) => glossary,
        Err(code) => return code,
    };
    let params = ctx.search_params(cmd.limit);
    let delay = Duration::from_millis(cmd.debounce_ms.unwrap_or(ctx.config.session.debounce_ms));

    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{}",
        dim(&format!(
            "{} entries loaded. Type a query per line; Ctrl-D to exit.",
            glossary.corpus.len()
        ))
    );
    runtime.block_on(Repl::new(glossary, params).run(delay))
}

/// State of one interactive session.
struct Repl {
    /// Loaded glossary shared with search tasks.
    glossary: Arc<Glossary>,
    /// Search parameters applied to every query.
    params: SearchParams,
    /// Last-query-wins tickets.
    session: SearchSession,
    /// Sender cloned into each search task.
    finished_tx: mpsc::UnboundedSender<Finished>,
    /// Receiver for finished searches.
    finished_rx: mpsc::UnboundedReceiver<Finished>,
    /// Searches started but not yet received.
    in_flight: usize,
}

impl Repl {
    /// Creates a session with nothing in flight.
    fn new(glossary: Arc<Glossary>, params: SearchParams) -> Self {
        let (finished_tx, finished_rx) = mpsc::unbounded_channel();
        Self {
            glossary,
            params,
            session: SearchSession::new(),
            finished_tx,
            finished_rx,
            in_flight: 0,
        }
    }

    /// Drives input, debounce timer and finished searches until all are exhausted.
    async fn run(mut self, delay: Duration) -> ExitCode {
        let mut lines = BufReader::new(io::stdin()).lines();
        let mut debouncer = Debouncer::new(delay);
        let mut input_open = true;
        debug!(delay_ms = debouncer.delay().as_millis(), "repl started");

        loop {
            // evaluated even when the branch is disabled, so it needs a value
            let deadline = debouncer
                .deadline()
                .map_or_else(Instant::now, Instant::from_std);

            tokio::select! {
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(line)) => {
                        if normalize_query(&line).is_empty() {
                            debouncer.flush();
                            self.session.invalidate();
                        } else {
                            debouncer.push(line, Instant::now().into_std());
                        }
                    }
                    Ok(None) => {
                        input_open = false;
                        if let Some(query) = debouncer.flush() {
                            self.start(query);
                        }
                    }
                    Err(e) => {
                        eprintln!("error: failed to read input: {e}");
                        return ExitCode::FAILURE;
                    }
                },
                () = sleep_until(deadline), if debouncer.is_pending() => {
                    if let Some(query) = debouncer.poll(Instant::now().into_std()) {
                        self.start(query);
                    }
                }
                Some((ticket, result)) = self.finished_rx.recv(), if self.in_flight > 0 => {
                    self.in_flight -= 1;
                    self.apply(ticket, result);
                }
                else => break,
            }
        }

        ExitCode::SUCCESS
    }

    /// Starts a search for `query` on the blocking pool under a fresh ticket.
    fn start(&mut self, query: String) {
        let ticket = self.session.begin();
        let glossary = Arc::clone(&self.glossary);
        let params = self.params;
        let finished_tx = self.finished_tx.clone();
        self.in_flight += 1;
        debug!(?ticket, query = %query, "starting search");

        task::spawn_blocking(move || {
            let rendered = search(&query, &glossary.corpus, &glossary.index, &params)
                .map(|outcome| render_outcome(&outcome, &query))
                .map_err(|e| e.to_string());
            if finished_tx.send((ticket, rendered)).is_err() {
                debug!(?ticket, "session closed before search finished");
            }
        });
    }

    /// Prints a finished search if it is still the latest one.
    fn apply(&self, ticket: Generation, result: Result<String, String>) {
        match self.session.accept(ticket, result) {
            Some(Ok(rendered)) => print!("{rendered}"),
            Some(Err(message)) => eprintln!("error: {message}"),
            None => debug!(?ticket, "discarding stale results"),
        }
    }
}
