//! `SnapshotObserver<W>` — bridges `FrameObserver` to an `OutputWriter`.

use pg_agent::{Population, TickStats};
use pg_core::{Direction, Frame, SceneBounds};
use pg_sim::FrameObserver;
use tracing::{info, warn};

use crate::row::{AgentSnapshotRow, FrameSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FrameObserver`] that writes penguin snapshots and frame summaries to
/// any [`OutputWriter`].
///
/// `FrameObserver` methods have no return value, so the first write error is
/// stored and later writes keep going.  Check with
/// [`take_error`][Self::take_error] once the driver has stopped.
pub struct SnapshotObserver<W: OutputWriter> {
    writer:     W,
    frames:     u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Frames summarised so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

impl<W: OutputWriter> FrameObserver for SnapshotObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, delta_secs: f32, stats: &TickStats) {
        self.frames += 1;
        let row = FrameSummaryRow {
            frame:    frame.0,
            delta_secs,
            agents:   stats.agents,
            entered:  stats.entered_total(),
            finished: stats.finished_total(),
        };
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, population: &Population) {
        let rows: Vec<AgentSnapshotRow> = population
            .iter()
            .map(|(id, penguin)| AgentSnapshotRow {
                frame:     frame.0,
                agent_id:  id.0,
                x:         penguin.body.x,
                y:         penguin.body.y,
                direction: direction_name(penguin.body.direction),
                behavior:  penguin.active_kind().map_or("none", |k| k.as_str()),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_resize(&mut self, bounds: SceneBounds, population: usize) {
        info!(%bounds, penguins = population, "scene rebuilt");
    }

    fn on_stop(&mut self, final_frame: Frame) {
        let result = self.writer.finish();
        self.store_err(result);
        info!(%final_frame, frames = self.frames, "output finished");
    }
}
