//! Frame observer trait for progress reporting and data collection.

use pg_agent::{Population, TickStats};
use pg_core::{Frame, SceneBounds};

/// Callbacks invoked by [`FrameDriver`][crate::FrameDriver] and
/// [`Scene::resize`][crate::Scene::resize].
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.
///
/// # Example: transition counter
///
/// ```rust,ignore
/// struct Transitions(u64);
///
/// impl FrameObserver for Transitions {
///     fn on_frame_end(&mut self, _frame: Frame, _delta: f32, stats: &TickStats) {
///         self.0 += stats.finished_total() as u64;
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called at the very start of each frame, before anything is drawn.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after the frame has been updated and drawn.
    fn on_frame_end(&mut self, _frame: Frame, _delta_secs: f32, _stats: &TickStats) {}

    /// Called every `snapshot_interval` frames with read-only access to the
    /// population, after the update.
    fn on_snapshot(&mut self, _frame: Frame, _population: &Population) {}

    /// Called after a resize has rebuilt the background and population.
    fn on_resize(&mut self, _bounds: SceneBounds, _population: usize) {}

    /// Called once when the host stops driving frames.
    fn on_stop(&mut self, _final_frame: Frame) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
