//! Viewport dimensions and the fixed geometry derived from them.
//!
//! The scene is laid out in screen space: `x` grows right, `y` grows down.
//! Everything below `SNOW_LINE * height` is the snow band penguins stand in.

use std::fmt;

/// Horizontal distance past either viewport edge at which a walking penguin
/// is considered gone.  Also the extra grace given to off-screen walkers.
pub const EDGE_MARGIN: f32 = 30.0;

/// Fraction of the viewport height where the snow band begins.
pub const SNOW_LINE: f32 = 0.95;

/// Vertical offset from a penguin's `y` to the point that touches the snow.
pub const FOOT_OFFSET: f32 = 20.0;

/// Viewport width and height in pixels.
///
/// The single source of truth for spawn bounds, boundary culling, and the
/// snow band.  Passed explicitly into every behavior call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl SceneBounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `y` where the snow band begins.
    #[inline]
    pub fn snow_line(&self) -> f32 {
        self.height * SNOW_LINE
    }

    /// Height of the snow band.
    #[inline]
    pub fn snow_depth(&self) -> f32 {
        self.height - self.height * SNOW_LINE
    }

    /// `x` at or below which a walker has left the scene on the left.
    #[inline]
    pub fn cull_left(&self) -> f32 {
        -EDGE_MARGIN
    }

    /// `x` at or above which a walker has left the scene on the right.
    #[inline]
    pub fn cull_right(&self) -> f32 {
        self.width + EDGE_MARGIN
    }

    /// Pixel dimensions, rounded up, for allocating raster buffers.
    ///
    /// Never returns a zero dimension.
    pub fn pixel_size(&self) -> (u32, u32) {
        let w = self.width.max(1.0).ceil() as u32;
        let h = self.height.max(1.0).ceil() as u32;
        (w, h)
    }
}

impl fmt::Display for SceneBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
