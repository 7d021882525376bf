//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `boardings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{BoardingRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    boardings: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "floor", "direction", "onboard", "waiting", "target"])?;

        let mut boardings = Writer::from_path(dir.join("boardings.csv"))?;
        boardings.write_record([
            "passenger_id",
            "start",
            "destination",
            "request_tick",
            "board_tick",
            "wait_ticks",
        ])?;

        Ok(Self {
            summaries,
            boardings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.direction.to_string(),
            row.onboard.to_string(),
            row.waiting.to_string(),
            // Empty cell for "no target".
            row.target.map(|f| f.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_boardings(&mut self, rows: &[BoardingRow]) -> OutputResult<()> {
        for row in rows {
            self.boardings.write_record(&[
                row.passenger_id.to_string(),
                row.start.to_string(),
                row.destination.to_string(),
                row.request_tick.to_string(),
                row.board_tick.to_string(),
                row.wait_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.boardings.flush()?;
        Ok(())
    }
}
