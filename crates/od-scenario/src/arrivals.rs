//! Seeded uniform arrival generator.

use od_core::SimRng;
use od_sim::{Orchestrator, TieBreaker};

use crate::{ScenarioError, ScenarioResult};

/// `count` arrivals drawn uniformly from `[0, horizon)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformArrivals {
    count:   usize,
    horizon: f64,
}

impl UniformArrivals {
    pub fn new(count: usize, horizon: f64) -> ScenarioResult<Self> {
        if !(horizon.is_finite() && horizon > 0.0) {
            return Err(ScenarioError::Config(format!(
                "arrival horizon must be finite and > 0, got {horizon}"
            )));
        }
        Ok(Self { count, horizon })
    }

    /// Draw the arrival times, in draw order (unsorted).
    pub fn sample(&self, rng: &mut SimRng) -> Vec<f64> {
        (0..self.count).map(|_| rng.gen_range(0.0..self.horizon)).collect()
    }

    /// Draw and schedule the arrivals on `sim`.  Returns the drawn times.
    pub fn schedule<T: TieBreaker>(
        &self,
        rng: &mut SimRng,
        sim: &mut Orchestrator<T>,
    ) -> ScenarioResult<Vec<f64>> {
        let times = self.sample(rng);
        for &t in &times {
            sim.add_order(t)?;
        }
        Ok(times)
    }
}
