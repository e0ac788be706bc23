//! `od-sim`: discrete-event orchestrator for the order-dispatch simulator.
//!
//! # Event loop
//!
//! ```text
//! while queue not empty:
//!   pop earliest (time, seq) event; now = event.time
//!   Arrival            → refresh all workers at `now`
//!                        candidates = workers that can accept
//!                        none  → rejected += 1
//!                        some  → least-loaded, ties via TieBreaker
//!                                start order, processed += 1,
//!                                schedule Completion at now + service_duration
//!   Completion(w)      → refresh w at `now`
//!   StatusChange(w, s) → set status; refresh when re-activated
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`replicate`] runs seeds on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use od_core::SimConfig;
//! use od_sim::{OrchestratorBuilder, OutcomeLog};
//!
//! let mut sim = OrchestratorBuilder::new(SimConfig::default())
//!     .workers(["alice", "bob"])
//!     .build()?;
//! sim.add_order(0.0)?;
//! sim.add_order(1.5)?;
//! let mut log = OutcomeLog::default();
//! sim.process_events(&mut log)?;
//! println!("{:?}", sim.stats());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod orchestrator;
pub mod outcome;
pub mod replicate;
pub mod routing;
pub mod stats;


pub use builder::OrchestratorBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, OutcomeLog, SimObserver};
pub use orchestrator::Orchestrator;
pub use outcome::Outcome;
pub use replicate::replicate;
pub use routing::{LowestId, RandomTieBreak, RoundRobin, TieBreaker};
pub use stats::SimStats;
