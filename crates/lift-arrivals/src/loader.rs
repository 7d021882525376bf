//! CSV arrival-script loader.
//!
//! # CSV format
//!
//! One row per passenger.  Rows need not be sorted.
//!
//! ```csv
//! tick,start,destination
//! 0,0,5
//! 0,3,1
//! 4,9,0
//! ```
//!
//! Floors are only checked for `start != destination` here; range checks
//! against the building happen when the simulation admits each passenger.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::{ArrivalError, ScriptedArrivals};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:        u64,
    start:       u32,
    destination: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a passenger script from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> Result<ScriptedArrivals, ArrivalError> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding scenarios as
/// string constants.
pub fn load_arrivals_reader<R: Read>(reader: R) -> Result<ScriptedArrivals, ArrivalError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut script = ScriptedArrivals::new();

    for (line, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
        let row = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        if row.start == row.destination {
            return Err(ArrivalError::Parse(format!(
                "row {}: start and destination are both {}",
                line + 1,
                row.start
            )));
        }
        script.push(Tick(row.tick), Floor(row.start), Floor(row.destination));
    }

    log::debug!("loaded {} scripted arrivals", script.len());
    Ok(script)
}
