//! The `Behavior` trait — one implementation per [`BehaviorKind`].

use pg_core::{AgentRng, Body, SceneBounds};

use crate::BehaviorKind;

/// Result of one [`Behavior::step`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Keep running next frame.
    Continue,
    /// The activation is over; the agent picks a new behavior next frame.
    Done,
}

/// A self-contained motion or idle rule.
///
/// Implementors are stateless; per-activation data lives in `State`.
///
/// # Contract
///
/// - `enter` is called exactly once per activation, before any `step`.
/// - `step` never panics on degenerate state: a zero or negative distance
///   or time simply reports [`StepOutcome::Done`].
/// - When `step` returns `Done` it must not have moved the body on that call.
///
/// # Example
///
/// ```rust
/// use pg_behavior::{Behavior, StepOutcome, WaitBehavior, WaitState};
/// use pg_core::{Body, SceneBounds};
///
/// let bounds = SceneBounds::new(800.0, 600.0);
/// let mut body = Body::new(10.0, 550.0);
/// let mut state = WaitState { time_ms: 1000.0 };
///
/// assert_eq!(WaitBehavior.step(0.5, &mut state, &mut body, bounds), StepOutcome::Continue);
/// assert_eq!(WaitBehavior.step(0.5, &mut state, &mut body, bounds), StepOutcome::Done);
/// ```
pub trait Behavior {
    /// Per-activation scratch data.
    type State;

    /// Which behavior this is.
    const KIND: BehaviorKind;

    /// Draw the randomized parameters for a new activation.
    ///
    /// May adjust the body's facing, never its position.
    fn enter(&self, body: &mut Body, bounds: SceneBounds, rng: &mut AgentRng) -> Self::State;

    /// Advance the activation by `dt` seconds.
    fn step(
        &self,
        dt:     f32,
        state:  &mut Self::State,
        body:   &mut Body,
        bounds: SceneBounds,
    ) -> StepOutcome;
}
