//! `od-events`: simulation events and the time-ordered event queue.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`event`]   | `Event`, `EventKind`                              |
//! | [`queue`]   | `EventQueue` (`BTreeMap<(SimTime, seq), EventKind>`) |
//! | [`error`]   | `QueueError`, `QueueResult<T>`                    |
//!
//! # Ordering model
//!
//! Events are ordered by `time`, then by the sequence number the queue
//! assigned when the event was scheduled.  Two events at the same time are
//! therefore popped first-in, first-out.

pub mod error;
pub mod event;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};
pub use event::{Event, EventKind};
pub use queue::EventQueue;
