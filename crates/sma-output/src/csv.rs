//! CSV output backend.
//!
//! Every file is `;`-delimited.  `agents_data.csv` matches the diagnostic
//! export format (`X;Y;Weight`, one row per agent) and is rewritten whole on
//! each [`OutputWriter::write_final`] call; the other two files stream.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};
use sma_core::Tick;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{AgentRow, OutputResult, TickSummaryRow};

const DELIMITER: u8 = b';';

pub const AGENTS_FILE:    &str = "agents_data.csv";
pub const SNAPSHOTS_FILE: &str = "agent_snapshots.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

fn open(path: &Path) -> OutputResult<Writer<File>> {
    let writer = WriterBuilder::new().delimiter(DELIMITER).from_path(path)?;
    debug!(path = %path.display(), "csv writer created");
    Ok(writer)
}

/// Empty field for a missing value, shortest round-trip text otherwise.
fn opt(value: Option<f32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write `rows` to `path` as `X;Y;Weight`, replacing any existing file.
pub fn export_agents(path: &Path, rows: &[AgentRow]) -> OutputResult<()> {
    let mut out = open(path)?;
    out.write_record(["X", "Y", "Weight"])?;
    for row in rows {
        out.write_record([row.x.to_string(), row.y.to_string(), row.weight.to_string()])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes simulation output to CSV files in one directory.
pub struct CsvWriter {
    dir:       PathBuf,
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the streaming CSV files in `dir` and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = open(&dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["Tick", "X", "Y", "Weight"])?;

        let mut summaries = open(&dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "iteration",
            "food_count",
            "best_fitness",
            "worst_fitness",
            "mean_weight",
        ])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            snapshots,
            summaries,
            finished: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, tick: Tick, rows: &[AgentRow]) -> OutputResult<()> {
        let tick = tick.0.to_string();
        for row in rows {
            self.snapshots.write_record([
                tick.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.weight.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record([
            row.tick.to_string(),
            row.iteration.to_string(),
            row.food_count.to_string(),
            opt(row.best_fitness),
            opt(row.worst_fitness),
            row.mean_weight.to_string(),
        ])?;
        Ok(())
    }

    fn write_final(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        export_agents(&self.dir.join(AGENTS_FILE), rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
