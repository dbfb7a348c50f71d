//! The `Scene`: viewport, background, and population.

use pg_agent::{Penguin, Population, TickStats};
use pg_core::{SceneBounds, SimConfig, SimRng};
use pg_scene::{Background, RgbaImage, SceneSurface, SpriteRect, generate_background};
use tracing::debug;

use crate::FrameObserver;

/// Everything one viewport shows.
///
/// Create via [`SceneBuilder`][crate::SceneBuilder].
pub struct Scene {
    /// Configuration the scene was built from.
    pub config: SimConfig,

    /// Current viewport.  Source of truth for spawning and culling.
    pub bounds: SceneBounds,

    /// Precomputed background for `bounds`.
    pub background: Background,

    /// Live penguins.
    pub population: Population,

    /// Penguin draw size (natural sprite size × `config.sprite_scale`).
    pub sprite_size: (f32, f32),

    /// Kept for regenerating the background on resize.
    pub(crate) hill_overlay: RgbaImage,

    /// Scene-level randomness: background ridges and population spawns.
    pub(crate) rng: SimRng,
}

impl Scene {
    /// Apply a new viewport size.
    ///
    /// Unchanged dimensions are ignored.  Otherwise the background is
    /// regenerated and the population rebuilt from scratch; returns `true`.
    pub fn resize<O: FrameObserver>(&mut self, bounds: SceneBounds, observer: &mut O) -> bool {
        if bounds == self.bounds {
            return false;
        }
        debug!(from = %self.bounds, to = %bounds, "viewport resized");

        self.bounds = bounds;
        self.background = generate_background(
            bounds,
            &self.hill_overlay,
            self.config.sky,
            &mut self.rng,
            self.background.generation + 1,
        );
        self.population.recreate(bounds, self.config.population_range(), &mut self.rng);

        observer.on_resize(bounds, self.population.len());
        true
    }

    /// Step every penguin by `delta_secs`.
    #[inline]
    pub fn update(&mut self, delta_secs: f32) -> TickStats {
        self.population.update(delta_secs, self.bounds)
    }

    /// Clear `surface` and paint the background.
    pub fn draw_background<S: SceneSurface>(&self, surface: &mut S) {
        surface.clear(self.bounds);
        surface.draw_background(&self.background);
    }

    /// Draw every penguin in population order.
    pub fn draw_population<S: SceneSurface>(&self, surface: &mut S) {
        for (_, penguin) in self.population.iter() {
            surface.draw_sprite(self.sprite_rect(penguin), penguin.body.direction.is_mirrored());
        }
    }

    /// Where `penguin`'s sprite lands on screen.
    pub fn sprite_rect(&self, penguin: &Penguin) -> SpriteRect {
        let (w, h) = self.sprite_size;
        SpriteRect { x: penguin.body.x, y: penguin.body.y, w, h }
    }
}
