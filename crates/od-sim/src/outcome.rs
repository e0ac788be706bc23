//! Observable per-event results.

use std::fmt;

use od_core::{SimTime, WorkerId, WorkerStatus};

/// What an event produced.  Borrowed from the orchestrator for the duration
/// of a [`SimObserver::on_outcome`](crate::SimObserver::on_outcome) call.
///
/// The `Display` form is stable and used for golden-output comparisons:
///
/// ```text
/// [0.00] accepted alice
/// [2.00] rejected
/// [5.00] completed alice
/// [10.00] status bob inactive
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome<'a> {
    Accepted  { time: SimTime, worker: WorkerId, name: &'a str },
    Rejected  { time: SimTime },
    Completed { time: SimTime, worker: WorkerId, name: &'a str },
    StatusChanged {
        time:   SimTime,
        worker: WorkerId,
        name:   &'a str,
        status: WorkerStatus,
    },
}

impl Outcome<'_> {
    pub fn time(&self) -> SimTime {
        match *self {
            Outcome::Accepted { time, .. }
            | Outcome::Rejected { time }
            | Outcome::Completed { time, .. }
            | Outcome::StatusChanged { time, .. } => time,
        }
    }

    /// The worker involved, if any.  `None` for rejections.
    pub fn worker(&self) -> Option<WorkerId> {
        match *self {
            Outcome::Accepted { worker, .. }
            | Outcome::Completed { worker, .. }
            | Outcome::StatusChanged { worker, .. } => Some(worker),
            Outcome::Rejected { .. } => None,
        }
    }
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Accepted { time, name, .. }  => write!(f, "[{time}] accepted {name}"),
            Outcome::Rejected { time }            => write!(f, "[{time}] rejected"),
            Outcome::Completed { time, name, .. } => write!(f, "[{time}] completed {name}"),
            Outcome::StatusChanged { time, name, status, .. } => {
                write!(f, "[{time}] status {name} {status}")
            }
        }
    }
}
