//! Small vertical drift inside the snow band, as if shuffling up or down
//! the slope.
//!
//! The penguin's feet sit [`FOOT_OFFSET`] below its `y`.  A step that would
//! put the feet on or outside the band `(snow_line, height)` ends the
//! behavior instead of moving.

use pg_core::{AgentRng, Body, Direction, FOOT_OFFSET, SceneBounds};

use crate::{Behavior, BehaviorKind, StepOutcome};

/// Drift speed range in pixels per second, `[MIN, MIN + SPREAD)`.
pub const SPEED_MIN: f32 = 2.0;
pub const SPEED_SPREAD: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraverseState {
    /// Vertical ground still to cover, pixels.
    pub distance: f32,
    /// Pixels per second.
    pub speed: f32,
    /// `Right` drifts down the screen (+y), `Left` drifts up.
    pub direction: Direction,
}

pub struct TraverseBehavior;

impl Behavior for TraverseBehavior {
    type State = TraverseState;
    const KIND: BehaviorKind = BehaviorKind::Traverse;

    fn enter(&self, _body: &mut Body, bounds: SceneBounds, rng: &mut AgentRng) -> TraverseState {
        TraverseState {
            distance:  (rng.unit() * bounds.snow_depth()).ceil(),
            speed:     SPEED_MIN + rng.unit() * SPEED_SPREAD,
            direction: rng.direction(),
        }
    }

    fn step(
        &self,
        dt:     f32,
        state:  &mut TraverseState,
        body:   &mut Body,
        bounds: SceneBounds,
    ) -> StepOutcome {
        let shift = state.speed * dt * state.direction.sign();
        let cover = shift.abs();
        let y = body.y + shift;
        let feet = y + FOOT_OFFSET;

        if state.distance - cover <= 0.0 || feet >= bounds.height || feet <= bounds.snow_line() {
            return StepOutcome::Done;
        }

        body.y = y;
        state.distance -= cover;
        StepOutcome::Continue
    }
}
