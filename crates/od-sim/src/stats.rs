//! Running counters.

/// Counters accumulated by the orchestrator.  All are monotonically
/// increasing.
///
/// `processed + rejected == arrivals` holds after every event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Orders assigned to a worker.
    pub processed: u64,
    /// Orders that found no eligible worker.
    pub rejected:  u64,
    /// Completion events handled.
    pub completed: u64,
    /// Arrival events popped from the queue.
    pub arrivals:  u64,
}
