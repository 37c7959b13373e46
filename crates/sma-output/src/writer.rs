//! The `OutputWriter` trait implemented by backend writers.

use sma_core::Tick;

use crate::{AgentRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// [`SimOutputObserver`](crate::SimOutputObserver) calls these from
/// observer hooks, which cannot fail, so it keeps the first error for
/// [`take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Append every agent's state at a snapshot tick.
    fn write_snapshot(&mut self, tick: Tick, rows: &[AgentRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write the end-of-run `X;Y;Weight` export.
    fn write_final(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
