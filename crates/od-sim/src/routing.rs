//! Tie-breaking strategies for the least-loaded routing rule.
//!
//! # Pluggability
//!
//! Routing always prefers the eligible worker with the fewest active orders.
//! When several eligible workers share that minimum, the orchestrator asks
//! its [`TieBreaker`] to pick one.  The strategy is a constructor parameter
//! of the orchestrator, so tests can swap the seeded random default for a
//! fully predictable one.

use od_core::{SimRng, WorkerId};

/// Chooses among equally loaded eligible workers.
///
/// `tied` is never empty and is sorted by `WorkerId`.  The return value is an
/// index into `tied`; out-of-range values are clamped by the caller.
pub trait TieBreaker {
    fn pick(&mut self, tied: &[WorkerId]) -> usize;
}

// ── RandomTieBreak ────────────────────────────────────────────────────────────

/// Uniformly random choice from a seeded [`SimRng`].  The default strategy.
#[derive(Clone, Debug)]
pub struct RandomTieBreak {
    rng: SimRng,
}

impl RandomTieBreak {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(SimRng::new(seed))
    }

    /// Use an existing stream, e.g. a [`SimRng::child`] of a driver's RNG.
    pub fn from_rng(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl TieBreaker for RandomTieBreak {
    fn pick(&mut self, tied: &[WorkerId]) -> usize {
        // Skip the draw when there is nothing to choose between so the
        // RNG stream only advances on real ties.
        if tied.len() == 1 {
            return 0;
        }
        self.rng.index(tied.len()).unwrap_or(0)
    }
}

// ── RoundRobin ────────────────────────────────────────────────────────────────

/// Picks the first tied worker after the one chosen last time, wrapping to
/// the lowest id.
#[derive(Clone, Debug, Default)]
pub struct RoundRobin {
    last: Option<WorkerId>,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TieBreaker for RoundRobin {
    fn pick(&mut self, tied: &[WorkerId]) -> usize {
        let idx = match self.last {
            Some(last) => tied.iter().position(|&w| w > last).unwrap_or(0),
            None => 0,
        };
        self.last = tied.get(idx).copied();
        idx
    }
}

// ── LowestId ──────────────────────────────────────────────────────────────────

/// Always the lowest `WorkerId`.  Fully deterministic, no state.
#[derive(Copy, Clone, Debug, Default)]
pub struct LowestId;

impl TieBreaker for LowestId {
    fn pick(&mut self, _tied: &[WorkerId]) -> usize {
        0
    }
}
