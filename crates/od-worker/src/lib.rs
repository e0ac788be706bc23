//! `od-worker`: worker state machine and registry.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`worker`] | `Worker` (active orders, next-available, status)      |
//! | [`pool`]   | `WorkerPool` (dense `Vec<Worker>` + name index)       |
//! | [`error`]  | `WorkerError`, `WorkerResult<T>`                      |
//!
//! # Availability model (summary)
//!
//! After `refresh(now)` drops orders whose service time has elapsed:
//!
//! ```text
//! 0 orders           next_available = now
//! 1 order  s0        next_available = max(now, s0 + cooldown)
//! full     s0 .. sn  next_available = max(s0 + service_duration, sn + cooldown)
//! ```
//!
//! A worker can accept when it is active, `now >= next_available`, and it
//! holds fewer than `capacity` orders.

pub mod error;
pub mod pool;
pub mod worker;


pub use error::{WorkerError, WorkerResult};
pub use pool::WorkerPool;
pub use worker::Worker;
