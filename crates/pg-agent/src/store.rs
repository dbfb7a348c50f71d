//! Population storage: penguins plus their per-agent RNGs.
//!
//! # Why two vectors?
//!
//! `Penguin::update` needs `&mut Penguin` and `&mut AgentRng` for the same
//! agent at once.  Keeping the RNGs in a separate `AgentRngs` lets the
//! update loop zip the two slices instead of fighting a single struct's
//! borrow.

use std::ops::Range;

use pg_behavior::BehaviorKind;
use pg_core::{AgentId, AgentRng, SceneBounds, SimRng};
use tracing::{debug, trace};

use crate::{Penguin, PopulationBuilder};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, parallel to `Population::penguins`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `population_seed`.
    pub(crate) fn new(count: usize, population_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(population_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── TickStats ─────────────────────────────────────────────────────────────────

/// Behavior transitions across the whole population during one update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Penguins updated.
    pub agents: u32,
    /// Activations entered, indexed by `BehaviorKind::index()`.
    pub entered: [u32; BehaviorKind::COUNT],
    /// Activations finished, indexed by `BehaviorKind::index()`.
    pub finished: [u32; BehaviorKind::COUNT],
}

impl TickStats {
    pub fn entered_total(&self) -> u32 {
        self.entered.iter().sum()
    }

    pub fn finished_total(&self) -> u32 {
        self.finished.iter().sum()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// The live penguins of one scene.
///
/// Rebuilt wholesale by [`recreate`][Self::recreate] whenever the viewport
/// changes; nothing carries over between generations.
pub struct Population {
    pub penguins: Vec<Penguin>,
    pub rngs: AgentRngs,
    /// Bumped by every rebuild.
    pub generation: u64,
}

impl Population {
    /// Spawn a fresh population for `bounds`.
    pub fn spawn(bounds: SceneBounds, size_range: Range<usize>, rng: &mut SimRng) -> Self {
        PopulationBuilder::new(bounds).size_range(size_range).build(rng)
    }

    /// Discard every penguin and spawn a new set for `bounds`.
    pub fn recreate(&mut self, bounds: SceneBounds, size_range: Range<usize>, rng: &mut SimRng) {
        let generation = self.generation + 1;
        *self = Self::spawn(bounds, size_range, rng);
        self.generation = generation;
        debug!(generation, count = self.len(), %bounds, "population recreated");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// Iterate penguins with their IDs, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Penguin)> {
        self.penguins.iter().enumerate().map(|(i, p)| (AgentId(i as u32), p))
    }

    /// Update every penguin by `dt` seconds, in ID order.
    pub fn update(&mut self, dt: f32, bounds: SceneBounds) -> TickStats {
        let mut stats = TickStats { agents: self.penguins.len() as u32, ..TickStats::default() };

        for (i, (penguin, rng)) in self.penguins.iter_mut().zip(self.rngs.inner.iter_mut()).enumerate() {
            let report = penguin.update(dt, bounds, rng);

            if let Some(kind) = report.finished {
                stats.finished[kind.index()] += 1;
                trace!(agent = i, %kind, "behavior finished");
            }
            if let Some(kind) = report.entered {
                stats.entered[kind.index()] += 1;
                trace!(agent = i, %kind, "behavior entered");
            }
        }

        stats
    }
}
