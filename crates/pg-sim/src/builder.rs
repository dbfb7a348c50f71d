//! Fluent builder for constructing a [`Scene`].

use pg_agent::Population;
use pg_core::{SceneBounds, SimConfig, SimRng};
use pg_scene::{Assets, generate_background};
use tracing::info;

use crate::{Scene, SimResult};

/// Fluent builder for [`Scene`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, sprite scale, population range, sky colour
/// - [`Assets`]: the loaded sprite and hill overlay.  Requiring them here
///   means no scene, and so no frame loop, exists before loading finished.
///
/// # Optional inputs
///
/// | Method        | Default              |
/// |---------------|----------------------|
/// | `.bounds(b)`  | `config.bounds()`    |
pub struct SceneBuilder {
    config: SimConfig,
    assets: Assets,
    bounds: Option<SceneBounds>,
}

impl SceneBuilder {
    pub fn new(config: SimConfig, assets: Assets) -> Self {
        Self { config, assets, bounds: None }
    }

    /// Start with a viewport other than the configured one, e.g. the real
    /// window size.
    pub fn bounds(mut self, bounds: SceneBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Validate the configuration, generate the first background, and spawn
    /// the first population.
    pub fn build(self) -> SimResult<Scene> {
        self.config.validate()?;

        let bounds = self.bounds.unwrap_or_else(|| self.config.bounds());
        let mut rng = SimRng::new(self.config.seed);

        let background =
            generate_background(bounds, &self.assets.hill_overlay, self.config.sky, &mut rng, 0);
        let population = Population::spawn(bounds, self.config.population_range(), &mut rng);
        let sprite_size = self.assets.sprite_size(self.config.sprite_scale);

        info!(
            %bounds,
            penguins = population.len(),
            seed = self.config.seed,
            "scene ready"
        );

        Ok(Scene {
            config: self.config,
            bounds,
            background,
            population,
            sprite_size,
            hill_overlay: self.assets.hill_overlay,
            rng,
        })
    }
}
