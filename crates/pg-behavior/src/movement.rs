//! Walk horizontally at a random speed for a random distance.
//!
//! A walker that starts outside the viewport is turned toward the scene and
//! given an *immunity distance*: the off-screen gap plus [`EDGE_MARGIN`].
//! Until that much ground has been covered the boundary cull is skipped, so
//! a penguin spawned (or left) off-screen can walk back into view.

use pg_core::{AgentRng, Body, Direction, EDGE_MARGIN, SceneBounds};

use crate::{Behavior, BehaviorKind, StepOutcome};

/// Walking speed range in pixels per second, `[MIN, MIN + SPREAD)`.
pub const SPEED_MIN: f32 = 25.0;
pub const SPEED_SPREAD: f32 = 10.0;

/// Walk length as a fraction of viewport width is clamped to this range.
pub const DISTANCE_FRACTION: (f32, f32) = (0.1, 0.9);

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveState {
    /// Facing chosen on entry.
    pub direction: Direction,
    /// Ground still to cover, pixels.
    pub distance: f32,
    /// Pixels per second.
    pub speed: f32,
    /// Remaining grace during which the boundary cull is skipped.
    /// Counts down past zero without clamping.
    pub immunity_distance: f32,
}

pub struct MoveBehavior;

impl Behavior for MoveBehavior {
    type State = MoveState;
    const KIND: BehaviorKind = BehaviorKind::Move;

    fn enter(&self, body: &mut Body, bounds: SceneBounds, rng: &mut AgentRng) -> MoveState {
        let (direction, immunity_distance) = if body.x < 0.0 {
            (Direction::Right, -body.x + EDGE_MARGIN)
        } else if body.x > bounds.width {
            (Direction::Left, (body.x - bounds.width) + EDGE_MARGIN)
        } else {
            (rng.direction(), 0.0)
        };

        let (lo, hi) = DISTANCE_FRACTION;
        let distance = rng.unit().clamp(lo, hi) * bounds.width;
        let speed = SPEED_MIN + rng.unit() * SPEED_SPREAD;

        body.direction = direction;

        MoveState {
            direction,
            distance: distance + immunity_distance,
            speed,
            immunity_distance,
        }
    }

    fn step(
        &self,
        dt:     f32,
        state:  &mut MoveState,
        body:   &mut Body,
        bounds: SceneBounds,
    ) -> StepOutcome {
        let cover = state.speed * dt;

        if state.immunity_distance <= 0.0
            && (state.distance - cover < 0.0
                || body.x <= bounds.cull_left()
                || body.x >= bounds.cull_right())
        {
            return StepOutcome::Done;
        }

        if state.immunity_distance > 0.0 {
            state.immunity_distance -= cover;
        }
        state.distance -= cover;
        body.x += state.direction.sign() * cover;

        StepOutcome::Continue
    }
}
