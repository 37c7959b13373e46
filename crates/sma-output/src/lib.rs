//! `sma-output`: simulation output writers for the rust_sma simulation.
//!
//! The CSV backend creates, in the configured output directory:
//!
//! | File                  | Header                                                             |
//! |-----------------------|--------------------------------------------------------------------|
//! | `agents_data.csv`     | `X;Y;Weight`, final state, one row per agent                       |
//! | `agent_snapshots.csv` | `Tick;X;Y;Weight`, one block per snapshot interval                 |
//! | `tick_summaries.csv`  | `tick;iteration;food_count;best_fitness;worst_fitness;mean_weight` |
//!
//! All files are `;`-delimited.  Floats use Rust's shortest round-trip
//! formatting, so values read back bit-exact.
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sma_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sma_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```
//!
//! [`export_agents`] writes the `X;Y;Weight` file on its own, without a
//! running observer.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::{CsvWriter, export_agents};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentRow, TickSummaryRow};
pub use writer::OutputWriter;
