use od_core::WorkerId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkerError {
    #[error("worker {0:?} not found")]
    NotFound(String),

    #[error("{0} is not registered")]
    UnknownId(WorkerId),

    #[error("worker name {0:?} is already registered")]
    Duplicate(String),

    #[error("cannot register worker #{0}: id space exhausted")]
    TooMany(usize),
}

pub type WorkerResult<T> = Result<T, WorkerError>;
