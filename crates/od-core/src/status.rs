//! Externally controlled worker availability.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Whether a worker may receive new orders.
///
/// Only an explicit status command changes this; order processing never
/// does.  An `Overloaded` state is reserved but has no transition rule, so it
/// is not modelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WorkerStatus {
    #[default]
    Active,
    Inactive,
}

impl WorkerStatus {
    #[inline]
    pub fn is_active(self) -> bool {
        self == WorkerStatus::Active
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkerStatus::Active   => "active",
            WorkerStatus::Inactive => "inactive",
        })
    }
}

impl FromStr for WorkerStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active"   => Ok(WorkerStatus::Active),
            "inactive" => Ok(WorkerStatus::Inactive),
            other => Err(CoreError::Parse(format!(
                "invalid worker status {other:?}: expected \"active\" or \"inactive\""
            ))),
        }
    }
}
