use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("event queue is empty")]
    Empty,
}

pub type QueueResult<T> = Result<T, QueueError>;
