//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{Passenger, Tick};
use lift_sim::{CabinSnapshot, SimObserver, SimStats};

use crate::row::{BoardingRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and boarding records to any
/// [`OutputWriter`] backend.
///
/// Tick summaries follow the snapshot interval.  Boardings are buffered
/// during a tick and written as one batch when the tick ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<BoardingRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_boardings(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_board(&mut self, tick: Tick, passenger: &Passenger, wait_ticks: u64) {
        self.pending.push(BoardingRow::new(passenger, tick, wait_ticks));
    }

    fn on_tick_end(&mut self, _tick: Tick, _stats: &SimStats) {
        self.flush_pending();
    }

    fn on_snapshot(&mut self, snapshot: &CabinSnapshot) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(snapshot));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _stats: &SimStats) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
