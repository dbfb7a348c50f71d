//! Deterministic per-agent and scene-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each penguin gets its own independent `SmallRng` seeded by:
//!
//!   seed = population_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! The population seed itself is drawn from the scene's `SimRng`, so a run
//! is fully reproducible from `SimConfig::seed` alone, including every
//! rebuild after a resize.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Direction};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in `AgentRngs`, parallel to the penguin vector, and handed to the
/// active behavior's `enter` and to behavior selection.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a population seed and an agent ID.
    pub fn new(population_seed: u64, agent: AgentId) -> Self {
        let seed = population_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    /// Generate a value uniformly in `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty, like `rand::Rng::gen_range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `Right` or `Left` with equal probability.
    #[inline]
    pub fn direction(&mut self) -> Direction {
        if self.unit() >= 0.5 { Direction::Right } else { Direction::Left }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Scene-level RNG for population spawning and background generation.
///
/// Only ever touched from the frame thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
