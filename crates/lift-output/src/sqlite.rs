//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `tick_summaries` and `boardings`.

use std::path::Path;

use rusqlite::Connection;

use crate::{BoardingRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick      INTEGER PRIMARY KEY,
                 floor     INTEGER NOT NULL,
                 direction TEXT    NOT NULL,
                 onboard   INTEGER NOT NULL,
                 waiting   INTEGER NOT NULL,
                 target    INTEGER
             );
             CREATE TABLE IF NOT EXISTS boardings (
                 passenger_id INTEGER PRIMARY KEY,
                 start        INTEGER NOT NULL,
                 destination  INTEGER NOT NULL,
                 request_tick INTEGER NOT NULL,
                 board_tick   INTEGER NOT NULL,
                 wait_ticks   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, floor, direction, onboard, waiting, target) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick,
                row.floor,
                row.direction.as_str(),
                row.onboard,
                row.waiting,
                row.target,
            ],
        )?;
        Ok(())
    }

    fn write_boardings(&mut self, rows: &[BoardingRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO boardings \
                 (passenger_id, start, destination, request_tick, board_tick, wait_ticks) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.passenger_id,
                    row.start,
                    row.destination,
                    row.request_tick,
                    row.board_tick,
                    row.wait_ticks,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
