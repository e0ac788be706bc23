//! Strongly typed worker identifier.
//!
//! `WorkerId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! direct index into the worker pool's `Vec` via `.index()`.

use std::fmt;

/// Dense index of a worker in the pool, assigned in registration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerId(pub u32);

impl WorkerId {
    /// Sentinel meaning "no valid worker".
    pub const INVALID: WorkerId = WorkerId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for WorkerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkerId({})", self.0)
    }
}

impl From<WorkerId> for usize {
    #[inline(always)]
    fn from(id: WorkerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for WorkerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<WorkerId, Self::Error> {
        u32::try_from(n).map(WorkerId)
    }
}
