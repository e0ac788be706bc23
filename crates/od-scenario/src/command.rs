//! Scenario commands and their application to an orchestrator.

use od_core::WorkerStatus;
use od_sim::{Orchestrator, SimError, TieBreaker};

use crate::ScenarioResult;

/// One driver input, timestamped in simulation time.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioCommand {
    /// An order arrives.
    Order { time: f64 },
    /// A worker's status changes at `time`.
    Status { time: f64, worker: String, status: WorkerStatus },
    /// A bare completion signal for `worker`, independent of any order.
    Complete { time: f64, worker: String },
}

impl ScenarioCommand {
    pub fn time(&self) -> f64 {
        match self {
            ScenarioCommand::Order { time }
            | ScenarioCommand::Status { time, .. }
            | ScenarioCommand::Complete { time, .. } => *time,
        }
    }
}

/// Schedule every command on `sim`, in slice order.
///
/// Stops at the first command the orchestrator refuses (invalid time,
/// unknown worker).  Commands before it stay scheduled.
pub fn apply_commands<T: TieBreaker>(
    commands: &[ScenarioCommand],
    sim:      &mut Orchestrator<T>,
) -> ScenarioResult<()> {
    for cmd in commands {
        match cmd {
            ScenarioCommand::Order { time } => sim.add_order(*time)?,
            ScenarioCommand::Status { time, worker, status } => {
                sim.schedule_status_change(*time, worker, *status)?
            }
            ScenarioCommand::Complete { time, worker } => {
                let id = sim.workers().id_of(worker).map_err(SimError::from)?;
                sim.inject_completion(*time, id)?
            }
        }
    }
    log::debug!("applied {} scenario commands", commands.len());
    Ok(())
}
