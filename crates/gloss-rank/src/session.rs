//! Interactive search bookkeeping.
//!
//! Two small pieces for front ends that search as the user types:
//!
//! - [`SearchSession`] hands out monotonically increasing [`Generation`] tickets. A
//!   result may only be applied while its ticket is still the latest one, so a slow
//!   search can never overwrite the results of a newer query.
//! - [`Debouncer`] coalesces bursts of input and releases only the last query once the
//!   input has been quiet for the configured delay.
//!
//! Neither owns a clock or a thread; callers pass in `Instant`s and drive them from
//! whatever event loop they run.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

/// Ticket identifying one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Shared last-query-wins state. Clones observe the same counter.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    /// Most recently issued generation.
    latest: Arc<AtomicU64>,
}

impl SearchSession {
    /// Creates a session with no searches issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new search, invalidating all earlier tickets.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Invalidates every outstanding ticket without starting a search.
    ///
    /// Used when the input is cleared and pending results should be dropped.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    /// Returns true if `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: Generation) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Passes `value` through only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: Generation, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

/// Coalesces rapid input into a single query.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet period required before a query is released.
    delay: Duration,
    /// Latest query and the instant it becomes due.
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records new input at `now`, replacing anything pending and restarting the delay.
    pub fn push(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now + self.delay));
    }

    /// When the pending query becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Returns true if a query is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Releases the pending query if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.pending.take() {
            Some((query, due)) if now >= due => Some(query),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Releases the pending query regardless of the deadline.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(query, _)| query)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn only_the_latest_ticket_is_current() {
        let session = SearchSession::new();
        let first = session.begin();
        assert!(session.is_current(first));

        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn stale_results_are_dropped() {
        let session = SearchSession::new();
        let slow = session.begin();
        let fast = session.begin();

        assert_eq!(session.accept(fast, "fresh"), Some("fresh"));
        assert_eq!(session.accept(slow, "stale"), None);
    }

    #[test]
    fn invalidate_drops_in_flight_results() {
        let session = SearchSession::new();
        let ticket = session.begin();
        session.invalidate();
        assert!(!session.is_current(ticket));
    }

    #[test]
    fn clones_share_the_counter() {
        let session = SearchSession::new();
        let ticket = session.begin();

        let worker = session.clone();
        thread::spawn(move || {
            worker.begin();
        })
        .join()
        .unwrap();

        assert!(!session.is_current(ticket));
    }

    #[test]
    fn debouncer_waits_for_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("wal", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY), Some("wal".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn debouncer_keeps_only_the_last_input() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("w", start);
        debouncer.push("wa", start + Duration::from_millis(50));
        debouncer.push("wal", start + Duration::from_millis(100));

        // the first deadline has passed but input kept coming
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(100) + DELAY)
        );
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(250)),
            Some("wal".to_string())
        );
    }

    #[test]
    fn flush_ignores_the_deadline() {
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("arweave", Instant::now());
        assert_eq!(debouncer.flush(), Some("arweave".to_string()));
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
