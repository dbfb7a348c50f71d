//! Unit tests for pg-scene.

use image::{Rgba, RgbaImage};
use pg_core::{SceneBounds, SimRng};

use crate::{
    Assets, Background, HillProfile, RasterSurface, SceneError, SceneSurface, SpriteRect,
    generate_background,
};

const SKY: [u8; 4] = [10, 20, 30, 255];

// ── Assets ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod asset_tests {
    use super::*;

    #[test]
    fn placeholder_sprite_scales() {
        let assets = Assets::placeholder();
        assert_eq!(assets.sprite_natural_size(), (100, 140));
        let (w, h) = assets.sprite_size(0.3);
        assert!((w - 30.0).abs() < 1e-4 && (h - 42.0).abs() < 1e-4);
    }

    #[test]
    fn missing_directory_reports_penguin_first() {
        let dir = tempfile::tempdir().unwrap();
        match Assets::load(&dir.path().join("nope")) {
            Err(SceneError::Load { name, .. }) => assert_eq!(name, "penguin"),
            other => panic!("expected load error, got ok = {}", other.is_ok()),
        }
    }

    #[test]
    fn unreadable_directory_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let assets = Assets::load_or_placeholder(&dir.path().join("nope"));
        assert_eq!(assets.sprite_natural_size(), Assets::placeholder().sprite_natural_size());
        assert_eq!(assets.hill_overlay.dimensions(), (64, 64));
    }

    #[test]
    fn missing_overlay_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        Assets::placeholder().penguin.save(dir.path().join("penguin.png")).unwrap();
        match Assets::load(dir.path()) {
            Err(SceneError::Load { name, .. }) => assert_eq!(name, "hill_overlay"),
            other => panic!("expected load error, got ok = {}", other.is_ok()),
        }
    }

    #[test]
    fn loads_both_pngs() {
        let dir = tempfile::tempdir().unwrap();
        let placeholder = Assets::placeholder();
        placeholder.penguin.save(dir.path().join("penguin.png")).unwrap();
        placeholder.hill_overlay.save(dir.path().join("hill_overlay.png")).unwrap();

        let assets = Assets::load(dir.path()).unwrap();
        assert_eq!(assets.penguin.dimensions(), placeholder.penguin.dimensions());
        assert_eq!(assets.hill_overlay.dimensions(), placeholder.hill_overlay.dimensions());
    }
}

// ── HillProfile ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod hill_tests {
    use super::*;

    #[test]
    fn closed_below_viewport() {
        let b = SceneBounds::new(640.0, 480.0);
        let p = HillProfile::generate(b, &mut SimRng::new(1));
        assert_eq!(p.points.first(), Some(&(-25.0, 530.0)));
        assert_eq!(p.points.last(), Some(&(665.0, 530.0)));
    }

    #[test]
    fn ridge_spans_width_in_bounded_steps() {
        let b = SceneBounds::new(640.0, 480.0);
        for seed in 0..50 {
            let p = HillProfile::generate(b, &mut SimRng::new(seed));
            let ridge = &p.points[1..p.points.len() - 1];

            assert!(ridge[0].0 <= -25.0 && ridge[0].0 >= -75.0, "first x {}", ridge[0].0);
            for pair in ridge[1..].windows(2) {
                let step = pair[1].0 - pair[0].0;
                assert!((25.0..=75.0).contains(&step), "step {step}");
            }
            assert!(ridge.last().unwrap().0 >= b.width);

            for &(_, y) in ridge {
                assert!(y >= 0.2 * b.height && y <= 0.65 * b.height, "ridge y {y}");
            }
        }
    }

    #[test]
    fn contains_below_ridge_not_above() {
        let b = SceneBounds::new(400.0, 300.0);
        let p = HillProfile::generate(b, &mut SimRng::new(9));
        assert!(p.contains(200.0, 290.0));
        assert!(!p.contains(200.0, 5.0));
    }
}

// ── Background ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod background_tests {
    use super::*;

    fn render(seed: u64, b: SceneBounds) -> Background {
        let overlay = Assets::placeholder().hill_overlay;
        generate_background(b, &overlay, SKY, &mut SimRng::new(seed), 7)
    }

    #[test]
    fn sized_to_viewport() {
        let bg = render(1, SceneBounds::new(320.5, 200.0));
        assert_eq!(bg.dimensions(), (321, 200));
        assert_eq!(bg.generation, 7);
    }

    #[test]
    fn snow_band_is_white_and_top_row_is_sky() {
        let b = SceneBounds::new(300.0, 200.0);
        let bg = render(2, b);
        for x in 0..300 {
            assert_eq!(*bg.image.get_pixel(x, 0), Rgba(SKY));
            assert_eq!(*bg.image.get_pixel(x, 190), Rgba([255, 255, 255, 255]));
            assert_eq!(*bg.image.get_pixel(x, 199), Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn texture_shows_only_inside_hills() {
        let b = SceneBounds::new(200.0, 100.0);
        let seed = 4;
        let profile = HillProfile::generate(b, &mut SimRng::new(seed));
        let bg = render(seed, b);

        let mut mismatches = 0;
        let mut total = 0;
        for y in 0..95 {
            for x in 0..200 {
                let px = *bg.image.get_pixel(x, y);
                if px == Rgba([0, 0, 0, 255]) {
                    // Outline or untextured fill.
                    continue;
                }
                let inside = profile.contains(x as f32 + 0.5, y as f32 + 0.5);
                let is_sky = px == Rgba(SKY);
                total += 1;
                if inside == is_sky {
                    mismatches += 1;
                }
            }
        }
        assert!(mismatches * 1000 < total, "{mismatches} of {total} pixels disagree");
    }

    #[test]
    fn hill_above_snow_is_textured() {
        let b = SceneBounds::new(200.0, 100.0);
        let bg = render(5, b);
        let px = *bg.image.get_pixel(100, 90);
        assert_ne!(px, Rgba(SKY));
        assert_ne!(px, Rgba([255, 255, 255, 255]));
        assert_ne!(px, Rgba([0, 0, 0, 255]), "opaque overlay should cover the black fill");
    }

    #[test]
    fn silhouette_is_outlined() {
        let b = SceneBounds::new(240.0, 160.0);
        let seed = 6;
        let profile = HillProfile::generate(b, &mut SimRng::new(seed));
        let white = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        let bg = generate_background(b, &white, SKY, &mut SimRng::new(seed), 0);

        let mut checked = 0;
        for &(x, y) in &profile.points {
            if x >= 0.0 && x < 240.0 && y >= 0.0 && y < 152.0 {
                assert_eq!(*bg.image.get_pixel(x as u32, y as u32), Rgba([0, 0, 0, 255]), "ridge point ({x}, {y})");
                checked += 1;
            }
        }
        assert!(checked > 0);

        // Deep inside the hill, away from any edge, the overlay still shows.
        assert_eq!(*bg.image.get_pixel(120, 144), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn same_seed_same_background() {
        let b = SceneBounds::new(120.0, 80.0);
        assert_eq!(render(11, b).image, render(11, b).image);
    }
}

// ── RasterSurface ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod raster_tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    /// 2×1 sprite: red on the left, blue on the right.
    fn two_tone() -> RgbaImage {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, RED);
        img.put_pixel(1, 0, BLUE);
        img
    }

    #[test]
    fn clear_resizes_to_bounds() {
        let mut s = RasterSurface::new(two_tone(), SceneBounds::new(10.0, 10.0));
        s.clear(SceneBounds::new(20.0, 5.0));
        assert_eq!(s.frame().dimensions(), (20, 5));
        assert!(s.frame().pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn sprite_scaled_into_rect() {
        let mut s = RasterSurface::new(two_tone(), SceneBounds::new(8.0, 4.0));
        s.draw_sprite(SpriteRect { x: 0.0, y: 0.0, w: 4.0, h: 2.0 }, false);
        for y in 0..2 {
            assert_eq!(*s.frame().get_pixel(0, y), RED);
            assert_eq!(*s.frame().get_pixel(1, y), RED);
            assert_eq!(*s.frame().get_pixel(2, y), BLUE);
            assert_eq!(*s.frame().get_pixel(3, y), BLUE);
        }
        assert_eq!(*s.frame().get_pixel(4, 0), CLEAR);
        assert_eq!(*s.frame().get_pixel(0, 2), CLEAR);
    }

    #[test]
    fn mirrored_sprite_flips_in_place() {
        let mut s = RasterSurface::new(two_tone(), SceneBounds::new(8.0, 4.0));
        s.draw_sprite(SpriteRect { x: 2.0, y: 1.0, w: 4.0, h: 2.0 }, true);
        assert_eq!(*s.frame().get_pixel(2, 1), BLUE);
        assert_eq!(*s.frame().get_pixel(5, 2), RED);
        assert_eq!(*s.frame().get_pixel(1, 1), CLEAR);
        assert_eq!(*s.frame().get_pixel(6, 1), CLEAR);
    }

    #[test]
    fn off_screen_sprite_is_clipped() {
        let mut s = RasterSurface::new(two_tone(), SceneBounds::new(8.0, 4.0));
        s.draw_sprite(SpriteRect { x: -3.0, y: 0.0, w: 4.0, h: 2.0 }, false);
        assert_eq!(*s.frame().get_pixel(0, 0), BLUE);
        s.draw_sprite(SpriteRect { x: 100.0, y: 100.0, w: 4.0, h: 2.0 }, false);
        s.draw_sprite(SpriteRect { x: 0.0, y: 0.0, w: 0.0, h: 2.0 }, false);
    }

    #[test]
    fn transparent_sprite_pixels_keep_background() {
        let mut sprite = RgbaImage::new(1, 1);
        sprite.put_pixel(0, 0, CLEAR);
        let b = SceneBounds::new(4.0, 4.0);
        let mut s = RasterSurface::new(sprite, b);
        let bg = Background { image: RgbaImage::from_pixel(4, 4, RED), generation: 0 };
        s.clear(b);
        s.draw_background(&bg);
        s.draw_sprite(SpriteRect { x: 0.0, y: 0.0, w: 4.0, h: 4.0 }, false);
        assert!(s.frame().pixels().all(|p| *p == RED));
    }

    #[test]
    fn half_alpha_blends() {
        let mut sprite = RgbaImage::new(1, 1);
        sprite.put_pixel(0, 0, Rgba([255, 0, 0, 128]));
        let b = SceneBounds::new(1.0, 1.0);
        let mut s = RasterSurface::new(sprite, b);
        s.draw_background(&Background {
            image:      RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])),
            generation: 0,
        });
        s.draw_sprite(SpriteRect { x: 0.0, y: 0.0, w: 1.0, h: 1.0 }, false);
        assert_eq!(*s.frame().get_pixel(0, 0), Rgba([128, 0, 0, 255]));
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let s = RasterSurface::new(two_tone(), SceneBounds::new(6.0, 3.0));
        s.save_png(&path).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (6, 3));
    }
}
