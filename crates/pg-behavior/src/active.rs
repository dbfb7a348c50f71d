//! The tagged per-activation state an agent carries.

use pg_core::{AgentRng, Body, SceneBounds};

use crate::{
    Behavior, BehaviorKind, MoveBehavior, MoveState, StepOutcome, TraverseBehavior,
    TraverseState, WaitBehavior, WaitState,
};

/// The running behavior of one agent together with its state.
///
/// Constructing one *is* entering the behavior, so an `ActiveBehavior`
/// always holds fully initialized state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveBehavior {
    Move(MoveState),
    Wait(WaitState),
    Traverse(TraverseState),
}

impl ActiveBehavior {
    /// Enter `kind` for the agent owning `body`.
    pub fn enter(
        kind:   BehaviorKind,
        body:   &mut Body,
        bounds: SceneBounds,
        rng:    &mut AgentRng,
    ) -> Self {
        match kind {
            BehaviorKind::Move => Self::Move(MoveBehavior.enter(body, bounds, rng)),
            BehaviorKind::Wait => Self::Wait(WaitBehavior.enter(body, bounds, rng)),
            BehaviorKind::Traverse => Self::Traverse(TraverseBehavior.enter(body, bounds, rng)),
        }
    }

    #[inline]
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::Move(_) => MoveBehavior::KIND,
            Self::Wait(_) => WaitBehavior::KIND,
            Self::Traverse(_) => TraverseBehavior::KIND,
        }
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32, body: &mut Body, bounds: SceneBounds) -> StepOutcome {
        match self {
            Self::Move(s) => MoveBehavior.step(dt, s, body, bounds),
            Self::Wait(s) => WaitBehavior.step(dt, s, body, bounds),
            Self::Traverse(s) => TraverseBehavior.step(dt, s, body, bounds),
        }
    }
}
