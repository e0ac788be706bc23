//! Simulation observer trait for outcome reporting and state inspection.

use od_core::SimTime;
use od_events::Event;
use od_worker::WorkerPool;

use crate::{Outcome, SimStats};

/// Callbacks invoked by [`Orchestrator::process_events`] while draining the
/// queue.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: outcome printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_outcome(&mut self, outcome: &Outcome<'_>) {
///         println!("{outcome}");
///     }
/// }
/// ```
///
/// [`Orchestrator::process_events`]: crate::Orchestrator::process_events
pub trait SimObserver {
    /// Called after an event is popped and the clock advanced, before it is
    /// handled.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once per handled event with what it produced.
    fn on_outcome(&mut self, _outcome: &Outcome<'_>) {}

    /// Called after an event is fully handled, with read-only access to every
    /// worker's state at that instant.
    fn on_event_end(&mut self, _event: &Event, _workers: &WorkerPool) {}

    /// Called when a drain call returns normally.
    fn on_run_end(&mut self, _now: SimTime, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Collects the rendered form of every outcome, in emission order.
///
/// Intended for golden-output tests and for drivers that print after the
/// run.
#[derive(Debug, Default, Clone)]
pub struct OutcomeLog {
    pub lines: Vec<String>,
}

impl OutcomeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome lines whose text contains `needle`.
    pub fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(move |l| l.contains(needle))
    }
}

impl SimObserver for OutcomeLog {
    fn on_outcome(&mut self, outcome: &Outcome<'_>) {
        self.lines.push(outcome.to_string());
    }
}

/// Forwards outcomes to the `log` facade at `info` level, and the run
/// summary once the queue drains.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_outcome(&mut self, outcome: &Outcome<'_>) {
        log::info!("{outcome}");
    }

    fn on_run_end(&mut self, now: SimTime, stats: &SimStats) {
        log::info!(
            "run ended at {now}: processed={} rejected={} completed={}",
            stats.processed, stats.rejected, stats.completed
        );
    }
}
