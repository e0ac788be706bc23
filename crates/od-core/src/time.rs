//! Simulation time model.
//!
//! # Design
//!
//! Time is a real-valued timestamp wrapped in `SimTime`.  Events are ordered
//! by it, so `SimTime` must be `Ord`; the wrapper provides a total order
//! through [`f64::total_cmp`].  Values entering the simulation from outside
//! go through [`SimTime::new`], which rejects negative and non-finite
//! inputs, so the total order never has to place NaN or −∞ in practice.
//!
//! Durations (service time, cooldown) stay plain `f64` and are added with
//! `SimTime + f64`.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp.
///
/// `Display` renders two decimal places (`[3.00]` style outcome lines rely
/// on it).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Validate an externally supplied timestamp.
    ///
    /// # Errors
    /// [`CoreError::InvalidTime`] if `t` is negative, NaN, or infinite.
    /// `-0.0` is accepted and normalized to `0.0`.
    pub fn new(t: f64) -> CoreResult<SimTime> {
        if t.is_finite() && t >= 0.0 {
            // `-0.0 + 0.0` is `+0.0`; total_cmp would otherwise order it first.
            Ok(SimTime(t + 0.0))
        } else {
            Err(CoreError::InvalidTime(t))
        }
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl From<SimTime> for f64 {
    fn from(t: SimTime) -> f64 {
        t.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
