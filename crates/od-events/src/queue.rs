//! `EventQueue`: the simulation's pending-event set.
//!
//! # Representation
//!
//! A `BTreeMap` keyed by `(SimTime, seq)`.  The sequence number is a
//! per-queue counter incremented on every `schedule`, so keys are unique and
//! equal-time events come out in insertion order.  Insert and pop-minimum
//! are both O(log n).

use std::collections::BTreeMap;

use od_core::SimTime;

use crate::{Event, EventKind, QueueError, QueueResult};

/// A priority queue of events ordered by time, then insertion sequence.
#[derive(Default, Debug)]
pub struct EventQueue {
    inner:    BTreeMap<(SimTime, u64), EventKind>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `time`.  Returns the sequence number
    /// assigned to the event.
    ///
    /// `time` is not validated here; callers at the simulation boundary go
    /// through [`SimTime::new`] first.
    pub fn schedule(&mut self, time: SimTime, kind: EventKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.inner.insert((time, seq), kind);
        seq
    }

    /// Remove and return the earliest event.
    ///
    /// # Errors
    /// [`QueueError::Empty`] if nothing is scheduled.
    pub fn pop_earliest(&mut self) -> QueueResult<Event> {
        let ((time, seq), kind) = self.inner.pop_first().ok_or(QueueError::Empty)?;
        Ok(Event { time, seq, kind })
    }

    /// Time of the earliest event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(t, _)| t)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of events ever scheduled on this queue.
    pub fn scheduled_total(&self) -> u64 {
        self.next_seq
    }
}
