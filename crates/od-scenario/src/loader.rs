//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per command.  `worker` and `status` are empty where unused.
//!
//! ```csv
//! time,action,worker,status
//! 0.0,order,,
//! 2.5,order,,
//! 10.0,status,bob,inactive
//! 10.0,complete,bob,
//! 20.0,status,bob,active
//! ```
//!
//! **`action`** field:
//!
//! | Value      | Command                                  | Needs             |
//! |------------|------------------------------------------|-------------------|
//! | `order`    | `ScenarioCommand::Order`                 |                   |
//! | `status`   | `ScenarioCommand::Status`                | `worker`, `status`|
//! | `complete` | `ScenarioCommand::Complete`              | `worker`          |
//!
//! Rows are returned in file order.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use od_core::WorkerStatus;

use crate::{ScenarioCommand, ScenarioError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    time:   f64,
    action: String,
    worker: Option<String>,
    status: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load scenario commands from a CSV file.
pub fn load_scenario_csv(path: &Path) -> Result<Vec<ScenarioCommand>, ScenarioError> {
    let file = std::fs::File::open(path).map_err(ScenarioError::Io)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for scenarios embedded
/// in a binary.
pub fn load_scenario_reader<R: Read>(reader: R) -> Result<Vec<ScenarioCommand>, ScenarioError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut commands = Vec::new();

    for (line, result) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        // +2: one for the header, one for 1-based numbering.
        commands.push(parse_record(row, line + 2)?);
    }

    Ok(commands)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(row: ScenarioRecord, line: usize) -> Result<ScenarioCommand, ScenarioError> {
    let time = row.time;
    match row.action.to_ascii_lowercase().as_str() {
        "order" => Ok(ScenarioCommand::Order { time }),
        "status" => {
            let worker = require(row.worker, "worker", line)?;
            let status = require(row.status, "status", line)?;
            let status = WorkerStatus::from_str(&status)
                .map_err(|e| ScenarioError::Parse(format!("line {line}: {e}")))?;
            Ok(ScenarioCommand::Status { time, worker, status })
        }
        "complete" => {
            let worker = require(row.worker, "worker", line)?;
            Ok(ScenarioCommand::Complete { time, worker })
        }
        other => Err(ScenarioError::Parse(format!(
            "line {line}: invalid action {other:?}: expected \"order\", \"status\", or \"complete\""
        ))),
    }
}

fn require(field: Option<String>, name: &str, line: usize) -> Result<String, ScenarioError> {
    field
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ScenarioError::Parse(format!("line {line}: missing {name}")))
}
