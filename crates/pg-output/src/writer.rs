//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, FrameSummaryRow, OutputResult};

/// Sink for snapshot and summary rows.
///
/// Errors are stored by the observer rather than interrupting the frame
/// loop; retrieve them with [`SnapshotObserver::take_error`][crate::SnapshotObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of penguin snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
