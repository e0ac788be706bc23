//! The per-worker capacity state machine.

use od_core::{SimConfig, SimTime, WorkerId, WorkerStatus};

/// A capacity-constrained worker.
///
/// `active_orders` holds the start times of orders still occupying capacity,
/// ascending.  `next_available` is derived from them by [`refresh`] and must
/// be refreshed at the current time before any accept decision.
///
/// [`refresh`]: Worker::refresh
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    id:               WorkerId,
    name:             String,
    status:           WorkerStatus,
    active_orders:    Vec<SimTime>,
    next_available:   SimTime,
    service_duration: f64,
    cooldown:         f64,
    capacity:         usize,
}

impl Worker {
    /// A fresh, active, idle worker available from time zero.
    pub fn new(id: WorkerId, name: impl Into<String>, config: &SimConfig) -> Self {
        Self {
            id,
            name:             name.into(),
            status:           WorkerStatus::Active,
            active_orders:    Vec::with_capacity(config.capacity),
            next_available:   SimTime::ZERO,
            service_duration: config.service_duration,
            cooldown:         config.cooldown,
            capacity:         config.capacity,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    /// Start times of orders still in service, ascending.
    #[inline]
    pub fn active_orders(&self) -> &[SimTime] {
        &self.active_orders
    }

    /// Number of active orders.
    #[inline]
    pub fn load(&self) -> usize {
        self.active_orders.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.active_orders.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// As of the last [`refresh`](Worker::refresh).
    #[inline]
    pub fn next_available(&self) -> SimTime {
        self.next_available
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Drop orders whose service time has elapsed by `now` and recompute
    /// `next_available`.
    ///
    /// Idempotent: a second call at the same `now` changes nothing.
    pub fn refresh(&mut self, now: SimTime) {
        let service = self.service_duration;
        self.active_orders.retain(|&start| start + service > now);

        self.next_available = match self.active_orders.as_slice() {
            [] => now,
            orders if orders.len() >= self.capacity => {
                let first = orders[0];
                let last = orders[orders.len() - 1];
                (first + service).max(last + self.cooldown)
            }
            orders => {
                let last = orders[orders.len() - 1];
                now.max(last + self.cooldown)
            }
        };
    }

    /// `true` if the worker is active, past its cooldown, and below capacity.
    #[inline]
    pub fn can_accept(&self, now: SimTime) -> bool {
        self.status.is_active()
            && now >= self.next_available
            && self.active_orders.len() < self.capacity
    }

    /// Begin serving an order at `now` and recompute `next_available`.
    ///
    /// # Panics
    /// If `can_accept(now)` is false.  The orchestrator only starts orders on
    /// workers it has just checked, so this indicates a routing bug.
    pub fn start(&mut self, now: SimTime) {
        assert!(
            self.can_accept(now),
            "start() on worker {} at {now} which cannot accept (status {}, load {}/{}, next available {})",
            self.name,
            self.status,
            self.active_orders.len(),
            self.capacity,
            self.next_available,
        );
        // Orders normally start in time order, so this is an append.
        let pos = self.active_orders.partition_point(|&s| s <= now);
        self.active_orders.insert(pos, now);
        self.refresh(now);
    }

    /// Set the externally controlled status.  Does not touch active orders.
    #[inline]
    pub fn set_status(&mut self, status: WorkerStatus) {
        self.status = status;
    }
}
