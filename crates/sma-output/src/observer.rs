//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use sma_agent::AgentStore;
use sma_core::Tick;
use sma_sim::{SimObserver, TickSummary};
use sma_world::TrailField;

use crate::row::{AgentRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams tick summaries and agent snapshots to any
/// [`OutputWriter`] backend, then writes the final agent export and closes
/// the writer when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
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
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _field: &TrailField) {
        if agents.is_empty() {
            return;
        }
        let result = self.writer.write_snapshot(tick, &AgentRow::from_store(agents));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, agents: &AgentStore) {
        let result = self.writer.write_final(&AgentRow::from_store(agents));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
