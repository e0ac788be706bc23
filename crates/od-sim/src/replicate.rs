//! Independent seeded replications.
//!
//! Each seed gets its own orchestrator (queue, workers, RNG), so runs share
//! nothing.  With the `parallel` feature the seeds run on Rayon's thread
//! pool; results are returned in seed order either way.

use od_core::SimConfig;

use crate::{Orchestrator, OrchestratorBuilder, RandomTieBreak, SimResult, SimStats};

/// Run one simulation per seed and return each run's final counters.
///
/// `scenario` receives the freshly built orchestrator and the seed, and
/// injects that run's inputs; the queue is then drained.
pub fn replicate<F>(
    config:   &SimConfig,
    workers:  &[&str],
    seeds:    &[u64],
    scenario: F,
) -> SimResult<Vec<SimStats>>
where
    F: Fn(&mut Orchestrator<RandomTieBreak>, u64) -> SimResult<()> + Send + Sync,
{
    let run_one = |seed: u64| -> SimResult<SimStats> {
        let mut sim = OrchestratorBuilder::new(config.with_seed(seed))
            .workers(workers.iter().copied())
            .build()?;
        scenario(&mut sim, seed)?;
        sim.run()
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&s| run_one(s)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seeds.par_iter().map(|&s| run_one(s)).collect()
    }
}
