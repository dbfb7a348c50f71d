//! Frame counting and host-timestamp bookkeeping.
//!
//! # Design
//!
//! The host (a window's vsync, or a fixed offline schedule) hands the frame
//! driver a timestamp in milliseconds every frame.  `FrameClock` remembers
//! the previous one and turns the gap into the `delta` seconds every
//! behavior is stepped by:
//!
//!   delta = (now_ms - last_render_ms) / 1000
//!
//! Frames are counted with an integer `Frame` so observers and output rows
//! have a stable key independent of wall-clock jitter.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.  Frame 0 is the first rendered frame.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The following frame.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }

    /// `true` every `interval` frames, starting at frame 0.  Never true for a
    /// zero interval.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the last render timestamp and the current frame number.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Host timestamp (ms) of the previous frame, or of startup before the
    /// first frame.
    pub last_render_ms: f64,
    /// Frame about to be rendered.
    pub current_frame: Frame,
}

impl FrameClock {
    /// Start counting from the host's current timestamp.
    pub fn start(now_ms: f64) -> Self {
        Self { last_render_ms: now_ms, current_frame: Frame::ZERO }
    }

    /// Seconds elapsed since the last render, as of `now_ms`.
    ///
    /// A timestamp earlier than the last one yields zero rather than a
    /// negative step.
    #[inline]
    pub fn delta_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.last_render_ms) / 1000.0).max(0.0) as f32
    }

    /// Record `now_ms` as rendered and move to the next frame.
    #[inline]
    pub fn advance(&mut self, now_ms: f64) {
        self.last_render_ms = now_ms;
        self.current_frame = self.current_frame.next();
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (@{:.1} ms)", self.current_frame, self.last_render_ms)
    }
}
