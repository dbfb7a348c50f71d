//! Sprite and texture assets.
//!
//! Both images are decoded eagerly by [`Assets::load`].  A scene can only be
//! built from a loaded `Assets`, so no frame is ever driven before every
//! asset has finished loading.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::{info, warn};

use crate::{SceneError, SceneResult};

pub const PENGUIN_FILE: &str = "penguin.png";
pub const HILL_OVERLAY_FILE: &str = "hill_overlay.png";

/// The two raster images the scene draws with.
#[derive(Clone)]
pub struct Assets {
    pub penguin: RgbaImage,
    pub hill_overlay: RgbaImage,
}

impl Assets {
    /// Decode `penguin.png` and `hill_overlay.png` from `dir`.
    pub fn load(dir: &Path) -> SceneResult<Self> {
        let penguin = load_rgba(dir, "penguin", PENGUIN_FILE)?;
        let hill_overlay = load_rgba(dir, "hill_overlay", HILL_OVERLAY_FILE)?;
        info!(
            dir = %dir.display(),
            penguin = ?penguin.dimensions(),
            hill_overlay = ?hill_overlay.dimensions(),
            "assets loaded"
        );
        Ok(Self { penguin, hill_overlay })
    }

    /// [`load`][Self::load], falling back to [`placeholder`][Self::placeholder]
    /// with a warning when either image cannot be read.
    pub fn load_or_placeholder(dir: &Path) -> Self {
        Self::load(dir).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to placeholder assets");
            Self::placeholder()
        })
    }

    /// Small synthetic stand-ins for when no asset directory is available.
    ///
    /// The penguin is a dark oval with a white belly on a transparent
    /// background, facing right (beak on the right edge); the overlay is a
    /// blue-grey vertical gradient.
    pub fn placeholder() -> Self {
        let penguin = RgbaImage::from_fn(100, 140, |x, y| {
            let (cx, cy) = (50.0, 70.0);
            let dx = (x as f32 + 0.5 - cx) / 42.0;
            let dy = (y as f32 + 0.5 - cy) / 66.0;
            let belly_dx = (x as f32 + 0.5 - cx - 8.0) / 24.0;
            let belly_dy = (y as f32 + 0.5 - cy - 12.0) / 46.0;
            if (88..100).contains(&x) && (30..40).contains(&y) {
                Rgba([0xf2, 0x9d, 0x1f, 0xff])
            } else if belly_dx * belly_dx + belly_dy * belly_dy <= 1.0 {
                Rgba([0xf5, 0xf5, 0xf5, 0xff])
            } else if dx * dx + dy * dy <= 1.0 {
                Rgba([0x1b, 0x1d, 0x24, 0xff])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let hill_overlay = RgbaImage::from_fn(64, 64, |_, y| {
            let shade = 0x50 + (y as u8) * 2;
            Rgba([shade / 2, shade / 2 + 0x10, shade, 0xff])
        });

        Self { penguin, hill_overlay }
    }

    /// Natural pixel size of the penguin sprite.
    #[inline]
    pub fn sprite_natural_size(&self) -> (u32, u32) {
        self.penguin.dimensions()
    }

    /// Draw size of the penguin sprite at `scale`.
    pub fn sprite_size(&self, scale: f32) -> (f32, f32) {
        let (w, h) = self.sprite_natural_size();
        (w as f32 * scale, h as f32 * scale)
    }
}

fn load_rgba(dir: &Path, name: &'static str, file: &str) -> SceneResult<RgbaImage> {
    let path = dir.join(file);
    let image = image::open(&path)
        .map_err(|source| SceneError::Load { name, path, source })?
        .to_rgba8();
    if image.width() == 0 || image.height() == 0 {
        return Err(SceneError::EmptyAsset(name));
    }
    Ok(image)
}
