//! Spawn rules for a new population.
//!
//! # Usage
//!
//! ```rust
//! use pg_agent::PopulationBuilder;
//! use pg_core::{SceneBounds, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(SceneBounds::new(1000.0, 800.0))
//!     .size_range(20..30)
//!     .build(&mut rng);
//!
//! assert!((20..30).contains(&population.len()));
//! assert_eq!(population.rngs.len(), population.len());
//! ```

use std::ops::Range;

use pg_core::{EDGE_MARGIN, FOOT_OFFSET, SceneBounds, SimRng};

use crate::{AgentRngs, Penguin, Population};

/// Gap kept between the bottom of the spawn band and the viewport bottom.
const SPAWN_BAND_INSET: f32 = 5.0;

/// Fluent builder for [`Population`].
///
/// Spawn positions:
///
/// - `x` uniform in `[0, width - 30)`
/// - `y = snow_line - 20 + ceil(r * (snow_depth - 5))`, so feet land in the
///   upper part of the snow band
pub struct PopulationBuilder {
    bounds: SceneBounds,
    size_range: Range<usize>,
}

impl PopulationBuilder {
    pub fn new(bounds: SceneBounds) -> Self {
        Self { bounds, size_range: 20..30 }
    }

    /// Population size range `[min, max)`.  An empty range spawns `min`.
    pub fn size_range(mut self, size_range: Range<usize>) -> Self {
        self.size_range = size_range;
        self
    }

    /// Draw the population size, positions, and per-agent RNG seed from
    /// `rng`.
    pub fn build(self, rng: &mut SimRng) -> Population {
        let count = if self.size_range.is_empty() {
            self.size_range.start
        } else {
            rng.gen_range(self.size_range.clone())
        };

        let base_y = self.bounds.snow_line() - FOOT_OFFSET;
        let band = self.bounds.snow_depth() - SPAWN_BAND_INSET;
        let span_x = self.bounds.width - EDGE_MARGIN;

        let penguins = (0..count)
            .map(|_| {
                let x = rng.unit() * span_x;
                let y = base_y + (rng.unit() * band).ceil();
                Penguin::new(x, y)
            })
            .collect();

        let population_seed: u64 = rng.random();

        Population {
            penguins,
            rngs: AgentRngs::new(count, population_seed),
            generation: 0,
        }
    }
}
