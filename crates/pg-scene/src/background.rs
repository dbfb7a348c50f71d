//! Procedural background: a jagged hill silhouette textured with the hill
//! overlay, above a white snow band.
//!
//! The background is generated once per viewport size and reused for every
//! frame until the next resize.
//!
//! # Silhouette
//!
//! ```text
//!   y = 0 ───────────────────────────────────────────── sky
//!         /\    /\/\      /\
//!   ~~~~~/  \__/    \____/  \____   ridge points every 25–75 px, outlined
//!   ███████████████████████████████ hill (overlay texture, clipped)
//!   ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░ snow from ceil(0.95 h)
//! ```
//!
//! Ridge heights are drawn between a per-scene `min` (20–24 % of height) and
//! `max` (60–64 %), both measured down from the top.  One ridge point in four
//! sits in the lower half of that range; the rest sit in the middle.

use image::{Rgba, RgbaImage};
use pg_core::{SNOW_LINE, SceneBounds, SimRng};
use tracing::debug;

/// Horizontal ridge step range, pixels: `ceil(STEP_MIN + r * STEP_SPREAD)`.
const STEP_MIN: f32 = 25.0;
const STEP_SPREAD: f32 = 50.0;

/// How far below the viewport the silhouette is closed.
const BASE_OVERHANG: f32 = 50.0;

/// Top of the overlay texture as a fraction of height; it spans the rest.
const OVERLAY_TOP: f32 = 0.3;
const OVERLAY_SPAN: f32 = 0.7;

const HILL: Rgba<u8> = Rgba([0, 0, 0, 0xff]);
const SNOW: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// A rendered background plus a counter identifying which regeneration
/// produced it, so GPU hosts can tell when to re-upload.
#[derive(Clone)]
pub struct Background {
    pub image: RgbaImage,
    pub generation: u64,
}

impl Background {
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Closed hill polygon in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct HillProfile {
    /// Vertices in path order, starting bottom-left below the viewport and
    /// ending bottom-right below the viewport.
    pub points: Vec<(f32, f32)>,
}

impl HillProfile {
    /// Draw a random ridge line spanning `bounds`.
    pub fn generate(bounds: SceneBounds, rng: &mut SimRng) -> Self {
        let (w, h) = (bounds.width, bounds.height);

        let max_h = (h * (60.0 + (rng.unit() * 5.0).floor()) / 100.0).ceil();
        let min_h = (h * (20.0 + (rng.unit() * 5.0).floor()) / 100.0).ceil();
        let d = (max_h - min_h) / 2.0;

        let ridge_y = |rng: &mut SimRng| {
            if rng.unit() <= 0.25 {
                (min_h + d + rng.unit() * d).ceil()
            } else {
                (min_h + d / 2.0 + rng.unit() * d).ceil()
            }
        };
        let step = |rng: &mut SimRng| (STEP_MIN + rng.unit() * STEP_SPREAD).ceil();

        let mut points = vec![(-STEP_MIN, h + BASE_OVERHANG)];

        let first_x = -step(rng);
        let first_y = ridge_y(rng);
        points.push((first_x, first_y));

        let mut x = 0.0;
        while x < w {
            x += step(rng);
            let y = ridge_y(rng);
            points.push((x, y));
        }

        points.push((w + STEP_MIN, h + BASE_OVERHANG));

        Self { points }
    }

    /// Even-odd containment test at a point.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let mut inside = false;
        let n = self.points.len();
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            if (y0 > py) != (y1 > py) {
                let t = (py - y0) / (y1 - y0);
                if px < x0 + t * (x1 - x0) {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Trace every edge of the closed polygon one pixel wide, clipped to
    /// the image.
    fn stroke(&self, image: &mut RgbaImage, colour: Rgba<u8>) {
        let (w, h) = image.dimensions();
        let n = self.points.len();
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().max(1.0) as u32;
            for k in 0..=steps {
                let t = k as f32 / steps as f32;
                let x = (x0 + t * (x1 - x0)).floor();
                let y = (y0 + t * (y1 - y0)).floor();
                if x >= 0.0 && y >= 0.0 && (x as u32) < w && (y as u32) < h {
                    image.put_pixel(x as u32, y as u32, colour);
                }
            }
        }
    }

    /// Spans `[x_start, x_end)` of pixel columns inside the polygon on pixel
    /// row `row`, sampled at pixel centres and clipped to `[0, width)`.
    fn row_spans(&self, row: u32, width: u32) -> Vec<(u32, u32)> {
        let cy = row as f32 + 0.5;
        let n = self.points.len();

        let mut crossings: Vec<f32> = Vec::new();
        for i in 0..n {
            let (x0, y0) = self.points[i];
            let (x1, y1) = self.points[(i + 1) % n];
            if (y0 > cy) != (y1 > cy) {
                let t = (cy - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }
        crossings.sort_by(f32::total_cmp);

        crossings
            .chunks_exact(2)
            .filter_map(|pair| {
                // Pixel x is inside when its centre x + 0.5 lies in [a, b).
                let start = (pair[0] - 0.5).ceil().max(0.0);
                let end = (pair[1] - 0.5).ceil().min(width as f32);
                (start < end).then_some((start as u32, end as u32))
            })
            .collect()
    }
}

/// Render a fresh background for `bounds`.
///
/// Outside the silhouette the image is `sky`.  Inside it, the hill overlay
/// is stretched over `[0, width) × [ceil(0.3 h), ceil(0.3 h) + ceil(0.7 h))`
/// and composited over black, so the texture only ever shows within the
/// hills.  The silhouette edge is then outlined in black, one pixel wide.
/// Rows from `ceil(0.95 h)` down are snow.
pub fn generate_background(
    bounds:     SceneBounds,
    overlay:    &RgbaImage,
    sky:        [u8; 4],
    rng:        &mut SimRng,
    generation: u64,
) -> Background {
    let profile = HillProfile::generate(bounds, rng);
    let (w, h) = bounds.pixel_size();
    let mut image = RgbaImage::from_pixel(w, h, Rgba(sky));

    let overlay_top = (bounds.height * OVERLAY_TOP).ceil();
    let overlay_height = (bounds.height * OVERLAY_SPAN).ceil().max(1.0);
    let (ow, oh) = overlay.dimensions();

    for row in 0..h {
        let v = (row as f32 + 0.5 - overlay_top) / overlay_height;
        for (start, end) in profile.row_spans(row, w) {
            for col in start..end {
                let mut px = HILL;
                if (0.0..1.0).contains(&v) && ow > 0 && oh > 0 {
                    let u = (col as f32 + 0.5) / bounds.width;
                    let sx = ((u * ow as f32) as u32).min(ow - 1);
                    let sy = ((v * oh as f32) as u32).min(oh - 1);
                    blend_over(&mut px, *overlay.get_pixel(sx, sy));
                }
                image.put_pixel(col, row, px);
            }
        }
    }

    profile.stroke(&mut image, HILL);

    let snow_top = (bounds.height * SNOW_LINE).ceil() as u32;
    for row in snow_top.min(h)..h {
        for col in 0..w {
            image.put_pixel(col, row, SNOW);
        }
    }

    debug!(%bounds, generation, ridge_points = profile.points.len(), "background generated");

    Background { image, generation }
}

/// Source-over alpha blend of `src` onto `dst`.
pub(crate) fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }
    if sa == 255 {
        *dst = src;
        return;
    }
    let da = dst[3] as u32;
    let inv = 255 - sa;
    let out_a = sa + da * inv / 255;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let premul = src[c] as u32 * sa + dst[c] as u32 * da * inv / 255;
        dst[c] = (premul / out_a).min(255) as u8;
    }
    dst[3] = out_a.min(255) as u8;
}
