//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `agent_snapshots.csv`
//! - `frame_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

pub const SNAPSHOTS_FILE: &str = "agent_snapshots.csv";
pub const SUMMARIES_FILE: &str = "frame_summaries.csv";

/// Writes output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["frame", "agent_id", "x", "y", "direction", "behavior"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["frame", "delta_secs", "agents", "entered", "finished"])?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.frame.to_string(),
                row.agent_id.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.direction.to_owned(),
                row.behavior.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            format!("{:.6}", row.delta_secs),
            row.agents.to_string(),
            row.entered.to_string(),
            row.finished.to_string(),
        ])?;
        Ok(())
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
