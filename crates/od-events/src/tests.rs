//! Unit tests for od-events.

use od_core::{SimTime, WorkerId, WorkerStatus};

use crate::{EventKind, EventQueue, QueueError};

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.peek_time(), None);
        assert_eq!(q.pop_earliest(), Err(QueueError::Empty));
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(7.0), EventKind::Arrival);
        q.schedule(SimTime(1.5), EventKind::Arrival);
        q.schedule(SimTime(3.0), EventKind::Completion(WorkerId(0)));
        assert_eq!(q.peek_time(), Some(SimTime(1.5)));

        let times: Vec<f64> = std::iter::from_fn(|| q.pop_earliest().ok())
            .map(|e| e.time.0)
            .collect();
        assert_eq!(times, vec![1.5, 3.0, 7.0]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_times_are_fifo() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(10.0), EventKind::Arrival);
        q.schedule(SimTime(10.0), EventKind::Completion(WorkerId(1)));
        q.schedule(
            SimTime(10.0),
            EventKind::StatusChange { worker: WorkerId(1), status: WorkerStatus::Inactive },
        );

        assert_eq!(q.pop_earliest().unwrap().kind, EventKind::Arrival);
        assert_eq!(q.pop_earliest().unwrap().kind, EventKind::Completion(WorkerId(1)));
        assert!(matches!(
            q.pop_earliest().unwrap().kind,
            EventKind::StatusChange { status: WorkerStatus::Inactive, .. }
        ));
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut q = EventQueue::new();
        let a = q.schedule(SimTime(5.0), EventKind::Arrival);
        let b = q.schedule(SimTime(1.0), EventKind::Arrival);
        assert!(b > a);
        assert_eq!(q.scheduled_total(), 2);
        // Popping does not reset the counter.
        q.pop_earliest().unwrap();
        assert_eq!(q.schedule(SimTime(0.0), EventKind::Arrival), 2);
    }

    #[test]
    fn popped_event_carries_seq() {
        let mut q = EventQueue::new();
        q.schedule(SimTime(2.0), EventKind::Arrival);
        let seq = q.schedule(SimTime(1.0), EventKind::Arrival);
        let e = q.pop_earliest().unwrap();
        assert_eq!(e.seq, seq);
        assert!(e.is_arrival());
    }
}
