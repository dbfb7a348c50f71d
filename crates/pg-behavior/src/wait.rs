//! Stand still for half a second to three and a half seconds.

use pg_core::{AgentRng, Body, SceneBounds};

use crate::{Behavior, BehaviorKind, StepOutcome};

/// Shortest wait, milliseconds.
pub const WAIT_MIN_MS: f32 = 500.0;
/// Random extra on top of [`WAIT_MIN_MS`], milliseconds.
pub const WAIT_SPREAD_MS: f32 = 3_000.0;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitState {
    /// Milliseconds left.
    pub time_ms: f32,
}

pub struct WaitBehavior;

impl Behavior for WaitBehavior {
    type State = WaitState;
    const KIND: BehaviorKind = BehaviorKind::Wait;

    fn enter(&self, _body: &mut Body, _bounds: SceneBounds, rng: &mut AgentRng) -> WaitState {
        WaitState { time_ms: WAIT_MIN_MS + rng.unit() * WAIT_SPREAD_MS }
    }

    fn step(
        &self,
        dt:      f32,
        state:   &mut WaitState,
        _body:   &mut Body,
        _bounds: SceneBounds,
    ) -> StepOutcome {
        state.time_ms -= dt * 1000.0;
        if state.time_ms <= 0.0 { StepOutcome::Done } else { StepOutcome::Continue }
    }
}
