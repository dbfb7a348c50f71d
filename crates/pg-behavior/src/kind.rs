//! The closed set of behaviors.

use std::fmt;

use pg_core::AgentRng;

/// Identity of a behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    Move,
    Wait,
    Traverse,
}

impl BehaviorKind {
    /// Every behavior, in selection order.
    pub const ALL: [BehaviorKind; 3] = [BehaviorKind::Move, BehaviorKind::Wait, BehaviorKind::Traverse];

    /// Number of behaviors.
    pub const COUNT: usize = Self::ALL.len();

    /// Pick one behavior uniformly at random.
    pub fn random(rng: &mut AgentRng) -> BehaviorKind {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }

    /// Position in [`ALL`][Self::ALL]; handy for per-kind counters.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            BehaviorKind::Move => 0,
            BehaviorKind::Wait => 1,
            BehaviorKind::Traverse => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::Move => "move",
            BehaviorKind::Wait => "wait",
            BehaviorKind::Traverse => "traverse",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
