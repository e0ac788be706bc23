//! `od-scenario`: driver-side inputs for the orchestrator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`command`]  | `ScenarioCommand`, `apply_commands`                       |
//! | [`loader`]   | `load_scenario_csv`, `load_scenario_reader`               |
//! | [`arrivals`] | `UniformArrivals` (seeded uniform arrival times)          |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! Nothing here touches the event loop; every command goes through the
//! orchestrator's public input methods and the same boundary validation.

pub mod arrivals;
pub mod command;
pub mod error;
pub mod loader;


pub use arrivals::UniformArrivals;
pub use command::{ScenarioCommand, apply_commands};
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario_csv, load_scenario_reader};
