//! Fluent builder for constructing an [`Orchestrator`].

use od_core::SimConfig;
use od_worker::WorkerPool;

use crate::{Orchestrator, RandomTieBreak, SimResult, TieBreaker};

/// Fluent builder for [`Orchestrator<T>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: service duration, cooldown, capacity, seed
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                               |
/// |--------------------|---------------------------------------|
/// | `.worker(name)`    | No workers (every order is rejected)  |
/// | `.tie_break(t)`    | `RandomTieBreak::new(config.seed)`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = OrchestratorBuilder::new(SimConfig::default())
///     .workers(["alice", "bob"])
///     .tie_break(RoundRobin::new())
///     .build()?;
/// ```
pub struct OrchestratorBuilder<T: TieBreaker = RandomTieBreak> {
    config:    SimConfig,
    names:     Vec<String>,
    tie_break: T,
}

impl OrchestratorBuilder<RandomTieBreak> {
    /// Create a builder whose tie-breaks draw from a RNG seeded with
    /// `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let tie_break = RandomTieBreak::new(config.seed);
        Self { config, names: Vec::new(), tie_break }
    }
}

impl<T: TieBreaker> OrchestratorBuilder<T> {
    /// Register one worker.  Ids are assigned in registration order.
    pub fn worker(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Register several workers in order.
    pub fn workers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Replace the tie-break strategy.
    pub fn tie_break<U: TieBreaker>(self, tie_break: U) -> OrchestratorBuilder<U> {
        OrchestratorBuilder {
            config: self.config,
            names:  self.names,
            tie_break,
        }
    }

    /// Validate the configuration, register the workers, and return a
    /// ready-to-run [`Orchestrator`] with an empty queue at time zero.
    pub fn build(self) -> SimResult<Orchestrator<T>> {
        self.config.validate()?;

        let mut pool = WorkerPool::new();
        for name in &self.names {
            pool.add(name, &self.config)?;
        }

        log::debug!(
            "orchestrator built: {} workers, service={} cooldown={} capacity={}",
            pool.len(),
            self.config.service_duration,
            self.config.cooldown,
            self.config.capacity,
        );

        Ok(Orchestrator::from_parts(self.config, pool, self.tie_break))
    }
}
