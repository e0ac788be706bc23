use od_core::CoreError;
use od_worker::WorkerError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// Rejected timestamp or configuration value.
    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    /// An event may not be scheduled earlier than the current clock.
    #[error("time {time:.2} is before the current simulation time {now:.2}")]
    BeforeNow { time: f64, now: f64 },

    #[error("worker not found: {0}")]
    WorkerNotFound(String),

    #[error("worker name {0:?} registered twice")]
    DuplicateWorker(String),

    #[error("too many workers: {0}")]
    TooManyWorkers(usize),
}

impl From<WorkerError> for SimError {
    fn from(e: WorkerError) -> Self {
        match e {
            WorkerError::NotFound(name) => SimError::WorkerNotFound(name),
            WorkerError::UnknownId(id)  => SimError::WorkerNotFound(id.to_string()),
            WorkerError::Duplicate(name) => SimError::DuplicateWorker(name),
            WorkerError::TooMany(n)     => SimError::TooManyWorkers(n),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
