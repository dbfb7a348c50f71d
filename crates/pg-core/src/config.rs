//! Top-level scene configuration.

use std::ops::Range;
use std::path::PathBuf;
#[cfg(feature = "serde")]
use std::path::Path;

use crate::{PgError, PgResult, SceneBounds};

/// Configuration for one scene run.
///
/// `Default` reproduces the stock look: 20–29 penguins drawn at 30 % of the
/// sprite's natural size on a 1280×720 viewport.  Hosts may load it from
/// JSON (with the `serde` feature) and override individual fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical scenes.
    pub seed: u64,

    /// Initial viewport width in pixels.  Hosts with a real window replace
    /// this with the window size on the first frame.
    pub width: f32,

    /// Initial viewport height in pixels.
    pub height: f32,

    /// Draw scale applied to the sprite's natural pixel size.
    pub sprite_scale: f32,

    /// Smallest population size (inclusive).
    pub population_min: usize,

    /// Largest population size (exclusive).
    pub population_max: usize,

    /// Directory holding `penguin.png` and `hill_overlay.png`.
    pub assets_dir: PathBuf,

    /// RGBA colour painted behind the hills.
    pub sky: [u8; 4],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            width:          1280.0,
            height:         720.0,
            sprite_scale:   0.3,
            population_min: 20,
            population_max: 30,
            assets_dir:     PathBuf::from("images"),
            sky:            [0x9f, 0xc9, 0xe8, 0xff],
        }
    }
}

impl SimConfig {
    /// Initial viewport as `SceneBounds`.
    #[inline]
    pub fn bounds(&self) -> SceneBounds {
        SceneBounds::new(self.width, self.height)
    }

    /// Population size range `[min, max)`.
    #[inline]
    pub fn population_range(&self) -> Range<usize> {
        self.population_min..self.population_max
    }

    /// Reject configurations the scene cannot run with.
    pub fn validate(&self) -> PgResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(PgError::Config(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.sprite_scale > 0.0) {
            return Err(PgError::Config(format!(
                "sprite_scale must be positive, got {}",
                self.sprite_scale
            )));
        }
        if self.population_min >= self.population_max {
            return Err(PgError::Config(format!(
                "population range {}..{} is empty",
                self.population_min, self.population_max
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl SimConfig {
    /// Environment variable naming an optional JSON config file.
    pub const ENV_VAR: &'static str = "PENGUINS_CONFIG";

    /// Read a JSON config.  Missing fields take their defaults.
    pub fn from_json_path(path: &Path) -> PgResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PgError::Config(format!("reading {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| PgError::Config(format!("parsing {}: {e}", path.display())))
    }

    /// The config named by [`ENV_VAR`][Self::ENV_VAR], or the defaults when
    /// it is unset.
    pub fn from_env() -> PgResult<Self> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::from_json_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
