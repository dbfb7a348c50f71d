//! Strongly typed agent identifier.
//!
//! The inner integer is `pub` to allow direct indexing into the population
//! `Vec`, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Index of a penguin in the current population.
///
/// IDs are only meaningful within one population: a resize rebuilds the
/// population and reissues IDs from zero.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
