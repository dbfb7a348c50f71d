//! The frame driver: turns host timestamps into update + render passes.

use pg_agent::TickStats;
use pg_core::{Frame, FrameClock};
use pg_scene::SceneSurface;
use tracing::trace;

use crate::{FrameObserver, Scene};

/// Drives a [`Scene`] one host frame at a time.
///
/// The driver never schedules anything itself: the host calls
/// [`frame`][Self::frame] from its own frame callback (a window's
/// `next_frame`, or [`run_fixed`][Self::run_fixed] for offline runs) and
/// yields between calls.
pub struct FrameDriver {
    clock: FrameClock,
    snapshot_interval: u64,
}

impl FrameDriver {
    /// Start timing from `now_ms`, the host's current timestamp.
    pub fn start(now_ms: f64) -> Self {
        Self { clock: FrameClock::start(now_ms), snapshot_interval: 0 }
    }

    /// Call `on_snapshot` every `interval` frames (0 disables snapshots).
    pub fn with_snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }

    /// Frame about to be rendered.
    #[inline]
    pub fn current_frame(&self) -> Frame {
        self.clock.current_frame
    }

    #[inline]
    pub fn last_render_ms(&self) -> f64 {
        self.clock.last_render_ms
    }

    /// Render one frame stamped `now_ms`: background, update, sprites.
    ///
    /// Returns the delta (seconds) the penguins were stepped by.
    pub fn frame<S, O>(
        &mut self,
        now_ms:   f64,
        scene:    &mut Scene,
        surface:  &mut S,
        observer: &mut O,
    ) -> f32
    where
        S: SceneSurface,
        O: FrameObserver,
    {
        let frame = self.clock.current_frame;
        let delta = self.clock.delta_secs(now_ms);
        observer.on_frame_start(frame);

        scene.draw_background(surface);
        let stats: TickStats = scene.update(delta);
        scene.draw_population(surface);

        if frame.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(frame, &scene.population);
        }
        observer.on_frame_end(frame, delta, &stats);
        trace!(%frame, delta, entered = stats.entered_total(), finished = stats.finished_total(), "frame");

        self.clock.advance(now_ms);
        delta
    }

    /// Render `frames` frames spaced `step_ms` apart, continuing from the
    /// last render timestamp.
    pub fn run_fixed<S, O>(
        &mut self,
        frames:   u64,
        step_ms:  f64,
        scene:    &mut Scene,
        surface:  &mut S,
        observer: &mut O,
    ) where
        S: SceneSurface,
        O: FrameObserver,
    {
        for _ in 0..frames {
            let now = self.clock.last_render_ms + step_ms;
            self.frame(now, scene, surface, observer);
        }
    }

    /// Tell the observer the host has stopped driving frames.
    pub fn stop<O: FrameObserver>(&self, observer: &mut O) {
        observer.on_stop(self.clock.current_frame);
    }
}
