//! The `Orchestrator` struct and its event loop.

use od_core::{SimConfig, SimTime, WorkerId, WorkerStatus};
use od_events::{Event, EventKind, EventQueue};
use od_worker::{Worker, WorkerPool};

use crate::{Outcome, RandomTieBreak, SimError, SimObserver, SimResult, SimStats, TieBreaker};

// ── Orchestrator ──────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the event queue, the worker pool, the clock, the counters, and the
/// tie-break strategy.  Nothing is shared between instances, so separate
/// orchestrators may run on separate threads.
///
/// Events are handled one at a time, to completion:
///
/// 1. **Arrival**: every worker is refreshed at `now`; the least-loaded
///    eligible worker takes the order (ties via `T`), or the order is
///    rejected.
/// 2. **Completion**: the named worker is refreshed at `now`.
/// 3. **StatusChange**: the named worker's status is set, refreshing it when
///    re-activated.
///
/// Create via [`OrchestratorBuilder`][crate::OrchestratorBuilder].
pub struct Orchestrator<T: TieBreaker = RandomTieBreak> {
    config:    SimConfig,
    now:       SimTime,
    queue:     EventQueue,
    workers:   WorkerPool,
    tie_break: T,
    stats:     SimStats,
}

impl<T: TieBreaker> Orchestrator<T> {
    pub(crate) fn from_parts(config: SimConfig, workers: WorkerPool, tie_break: T) -> Self {
        Self {
            config,
            now: SimTime::ZERO,
            queue: EventQueue::new(),
            workers,
            tie_break,
            stats: SimStats::default(),
        }
    }

    // ── Inputs ────────────────────────────────────────────────────────────

    /// Schedule an order arrival at `time`.
    ///
    /// # Errors
    /// - [`SimError::InvalidInput`] if `time` is negative or non-finite.
    /// - [`SimError::BeforeNow`] if `time` is earlier than the clock.
    pub fn add_order(&mut self, time: f64) -> SimResult<()> {
        let at = self.check_time(time)?;
        self.queue.schedule(at, EventKind::Arrival);
        Ok(())
    }

    /// Change a worker's status immediately, at the current clock.
    ///
    /// Re-activating a worker refreshes it so orders that aged out while it
    /// was inactive no longer count.  Deactivating keeps its in-flight
    /// orders; they still complete through their scheduled events.
    pub fn set_status(&mut self, name: &str, status: WorkerStatus) -> SimResult<()> {
        let id = self.workers.id_of(name)?;
        self.apply_status(id, status)?;
        log::debug!("[{}] {name} set {status}", self.now);
        Ok(())
    }

    /// Schedule a status change for `name` at simulation time `time`.
    pub fn schedule_status_change(
        &mut self,
        time:   f64,
        name:   &str,
        status: WorkerStatus,
    ) -> SimResult<()> {
        let at = self.check_time(time)?;
        let worker = self.workers.id_of(name)?;
        self.queue.schedule(at, EventKind::StatusChange { worker, status });
        Ok(())
    }

    /// Push a raw completion event for `worker` at `time`.
    ///
    /// The id is not checked here; an unregistered id fails with
    /// [`SimError::WorkerNotFound`] when the event is processed.
    pub fn inject_completion(&mut self, time: f64, worker: WorkerId) -> SimResult<()> {
        let at = self.check_time(time)?;
        self.queue.schedule(at, EventKind::Completion(worker));
        Ok(())
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Drain the event queue, reporting every outcome to `observer`.
    ///
    /// # Errors
    /// [`SimError::WorkerNotFound`] if a completion event names an
    /// unregistered worker.  The offending event is consumed; the remaining
    /// events stay queued and a later call resumes from them.
    pub fn process_events<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while let Ok(event) = self.queue.pop_earliest() {
            self.dispatch(event, observer)?;
        }
        log::info!(
            "event queue drained at {}: processed={} rejected={}",
            self.now, self.stats.processed, self.stats.rejected
        );
        observer.on_run_end(self.now, &self.stats);
        Ok(())
    }

    /// Process only events with `time <= horizon`, leaving later ones queued.
    ///
    /// Useful for tests and incremental stepping.
    pub fn process_until<O: SimObserver>(
        &mut self,
        horizon:  f64,
        observer: &mut O,
    ) -> SimResult<()> {
        let horizon = SimTime::new(horizon)?;
        while self.queue.peek_time().is_some_and(|t| t <= horizon) {
            let event = match self.queue.pop_earliest() {
                Ok(e) => e,
                Err(_) => break,
            };
            self.dispatch(event, observer)?;
        }
        observer.on_run_end(self.now, &self.stats);
        Ok(())
    }

    /// [`process_events`](Self::process_events) without an observer.
    pub fn run(&mut self) -> SimResult<SimStats> {
        self.process_events(&mut crate::NoopObserver)?;
        Ok(self.stats)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    pub fn now(&self) -> SimTime {
        self.now
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn workers(&self) -> &WorkerPool {
        &self.workers
    }

    pub fn worker(&self, name: &str) -> SimResult<&Worker> {
        Ok(self.workers.by_name(name)?)
    }

    /// The tie-break strategy, e.g. to inspect a recording test double.
    pub fn tie_breaker(&self) -> &T {
        &self.tie_break
    }

    /// Events still waiting in the queue.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        debug_assert!(event.time >= self.now, "clock moved backwards");
        self.now = event.time;
        observer.on_event(&event);
        log::trace!("[{}] pop #{} {:?}", self.now, event.seq, event.kind);

        match event.kind {
            EventKind::Arrival => self.route(observer)?,
            EventKind::Completion(worker) => self.complete(worker, observer)?,
            EventKind::StatusChange { worker, status } => {
                self.apply_status(worker, status)?;
                let w = self.workers.get(worker)?;
                observer.on_outcome(&Outcome::StatusChanged {
                    time: self.now,
                    worker,
                    name: w.name(),
                    status,
                });
            }
        }

        observer.on_event_end(&event, &self.workers);
        Ok(())
    }

    /// Assign an arriving order to the least-loaded eligible worker.
    fn route<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        self.stats.arrivals += 1;
        self.workers.refresh_all(now);

        let min_load = self
            .workers
            .iter()
            .filter(|w| w.can_accept(now))
            .map(Worker::load)
            .min();

        let Some(min_load) = min_load else {
            self.stats.rejected += 1;
            log::debug!("[{now}] order rejected: no eligible worker");
            observer.on_outcome(&Outcome::Rejected { time: now });
            return Ok(());
        };

        let tied: Vec<WorkerId> = self
            .workers
            .iter()
            .filter(|w| w.can_accept(now) && w.load() == min_load)
            .map(Worker::id)
            .collect();
        let pick = self.tie_break.pick(&tied).min(tied.len() - 1);
        let chosen = tied[pick];

        let worker = self.workers.get_mut(chosen)?;
        worker.start(now);
        self.stats.processed += 1;
        self.queue.schedule(
            now + self.config.service_duration,
            EventKind::Completion(chosen),
        );

        log::debug!("[{now}] order accepted by {} (load {})", worker.name(), worker.load());
        observer.on_outcome(&Outcome::Accepted { time: now, worker: chosen, name: worker.name() });
        Ok(())
    }

    fn complete<O: SimObserver>(&mut self, id: WorkerId, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        let worker = self.workers.get_mut(id)?;
        worker.refresh(now);
        self.stats.completed += 1;
        log::debug!("[{now}] order completed by {}", worker.name());
        observer.on_outcome(&Outcome::Completed { time: now, worker: id, name: worker.name() });
        Ok(())
    }

    fn apply_status(&mut self, id: WorkerId, status: WorkerStatus) -> SimResult<()> {
        let now = self.now;
        let worker = self.workers.get_mut(id)?;
        worker.set_status(status);
        if status.is_active() {
            worker.refresh(now);
        }
        Ok(())
    }

    fn check_time(&self, time: f64) -> SimResult<SimTime> {
        let at = SimTime::new(time)?;
        if at < self.now {
            return Err(SimError::BeforeNow { time, now: self.now.0 });
        }
        Ok(at)
    }
}
