//! Simulation-wide configuration.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// Typically built with `SimConfig::default()` and tweaked field by field, or
/// loaded from JSON by the application crate (enable the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// How long an accepted order occupies worker capacity.  Default: 5.
    pub service_duration: f64,

    /// Minimum gap between two order starts on the same worker.  Default: 3.
    pub cooldown: f64,

    /// Maximum concurrent active orders per worker.  Default: 2.
    pub capacity: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            service_duration: 5.0,
            cooldown:         3.0,
            capacity:         2,
            seed:             42,
        }
    }
}

impl SimConfig {
    /// Check that durations are finite and non-negative and that capacity is
    /// at least one.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.service_duration.is_finite() && self.service_duration >= 0.0) {
            return Err(CoreError::Config(format!(
                "service_duration must be finite and >= 0, got {}",
                self.service_duration
            )));
        }
        if !(self.cooldown.is_finite() && self.cooldown >= 0.0) {
            return Err(CoreError::Config(format!(
                "cooldown must be finite and >= 0, got {}",
                self.cooldown
            )));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Same configuration with a different seed.
    pub fn with_seed(&self, seed: u64) -> SimConfig {
        SimConfig { seed, ..self.clone() }
    }
}
