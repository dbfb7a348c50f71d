//! The drawing interface the frame driver renders through.

use pg_core::SceneBounds;

use crate::Background;

/// Destination box of one sprite draw, in scene pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A 2D surface sized to the viewport.
///
/// The surface owns its sprite handle; the scene only tells it where to
/// draw.  Implementations: [`RasterSurface`][crate::RasterSurface] for
/// offline frames, and the window demo's GPU surface.
pub trait SceneSurface {
    /// Clear the whole viewport, resizing the surface to `bounds` if needed.
    fn clear(&mut self, bounds: SceneBounds);

    /// Paint the precomputed background at the origin.
    fn draw_background(&mut self, background: &Background);

    /// Draw the penguin sprite stretched to `rect`.  `mirrored` flips it
    /// horizontally within the same box.
    fn draw_sprite(&mut self, rect: SpriteRect, mirrored: bool);
}
