//! Event records.

use od_core::{SimTime, WorkerId, WorkerStatus};

/// What happens when an event is popped.  Each variant carries exactly the
/// data its handler needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A new order asks to be routed to a worker.
    Arrival,
    /// An order started on `WorkerId` has reached the end of its service time.
    Completion(WorkerId),
    /// A deferred status command for a worker.
    StatusChange { worker: WorkerId, status: WorkerStatus },
}

/// A scheduled event, as returned by [`EventQueue::pop_earliest`].
///
/// `seq` is assigned by the queue at scheduling time and is unique per
/// queue; it exists only to order events that share a `time`.
///
/// [`EventQueue::pop_earliest`]: crate::EventQueue::pop_earliest
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time: SimTime,
    pub seq:  u64,
    pub kind: EventKind,
}

impl Event {
    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self.kind, EventKind::Arrival)
    }
}
