//! Software [`SceneSurface`] over an `RgbaImage`.

use std::path::Path;

use image::{Rgba, RgbaImage};
use pg_core::SceneBounds;

use crate::background::blend_over;
use crate::{Background, SceneError, SceneResult, SceneSurface, SpriteRect};

/// CPU frame buffer with nearest-neighbour sprite scaling.
pub struct RasterSurface {
    frame: RgbaImage,
    sprite: RgbaImage,
}

impl RasterSurface {
    /// A surface sized to `bounds` that draws `sprite` for every penguin.
    pub fn new(sprite: RgbaImage, bounds: SceneBounds) -> Self {
        let (w, h) = bounds.pixel_size();
        Self { frame: RgbaImage::new(w, h), sprite }
    }

    /// The most recently composed frame.
    #[inline]
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    /// Write the current frame as a PNG.
    pub fn save_png(&self, path: &Path) -> SceneResult<()> {
        self.frame
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| SceneError::Save { path: path.to_path_buf(), source })
    }
}

impl SceneSurface for RasterSurface {
    fn clear(&mut self, bounds: SceneBounds) {
        let (w, h) = bounds.pixel_size();
        if self.frame.dimensions() != (w, h) {
            self.frame = RgbaImage::new(w, h);
        } else {
            self.frame.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
        }
    }

    fn draw_background(&mut self, background: &Background) {
        let (fw, fh) = self.frame.dimensions();
        let (bw, bh) = background.dimensions();
        for y in 0..fh.min(bh) {
            for x in 0..fw.min(bw) {
                self.frame.put_pixel(x, y, *background.image.get_pixel(x, y));
            }
        }
    }

    fn draw_sprite(&mut self, rect: SpriteRect, mirrored: bool) {
        let (fw, fh) = self.frame.dimensions();
        let (sw, sh) = self.sprite.dimensions();
        if rect.w <= 0.0 || rect.h <= 0.0 || sw == 0 || sh == 0 {
            return;
        }

        // Destination pixels whose centres fall inside the rect.
        let x0 = (rect.x - 0.5).ceil().max(0.0);
        let y0 = (rect.y - 0.5).ceil().max(0.0);
        let x1 = (rect.x + rect.w - 0.5).ceil().min(fw as f32);
        let y1 = (rect.y + rect.h - 0.5).ceil().min(fh as f32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0 as u32..y1 as u32 {
            let v = (dy as f32 + 0.5 - rect.y) / rect.h;
            let sy = ((v * sh as f32) as u32).min(sh - 1);
            for dx in x0 as u32..x1 as u32 {
                let mut u = (dx as f32 + 0.5 - rect.x) / rect.w;
                if mirrored {
                    u = 1.0 - u;
                }
                let sx = ((u * sw as f32) as u32).min(sw - 1);
                let src = *self.sprite.get_pixel(sx, sy);
                blend_over(self.frame.get_pixel_mut(dx, dy), src);
            }
        }
    }
}
