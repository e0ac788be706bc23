//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `od-core` validation.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// A timestamp that is negative, NaN, or infinite.
    #[error("invalid simulation time {0}: must be finite and non-negative")]
    InvalidTime(f64),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `od-core`.
pub type CoreResult<T> = Result<T, CoreError>;
