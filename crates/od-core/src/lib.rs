//! `od-core`: foundational types for the order-dispatch simulator.
//!
//! This crate is a dependency of every other `od-*` crate.  It has no `od-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `WorkerId`                                            |
//! | [`status`]      | `WorkerStatus` (`Active` / `Inactive`)                |
//! | [`time`]        | `SimTime` (totally ordered `f64` timestamp)           |
//! | [`config`]      | `SimConfig` (service duration, cooldown, capacity, seed) |
//! | [`rng`]         | `SimRng` (seedable simulation RNG)                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::WorkerId;
pub use rng::SimRng;
pub use status::WorkerStatus;
pub use time::SimTime;
