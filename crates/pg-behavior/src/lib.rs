//! `pg-behavior` — the behaviors a penguin can run.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`kind`]       | `BehaviorKind` (`Move`, `Wait`, `Traverse`)                |
//! | [`model`]      | `Behavior` trait, `StepOutcome`                            |
//! | [`movement`]   | `MoveBehavior` / `MoveState` — walk across the scene       |
//! | [`wait`]       | `WaitBehavior` / `WaitState` — stand still for a while     |
//! | [`traverse`]   | `TraverseBehavior` / `TraverseState` — bob along the slope |
//! | [`active`]     | `ActiveBehavior` — the tagged state an agent holds         |
//!
//! # Design notes
//!
//! Behaviors are stateless unit structs.  Everything an activation needs
//! lives in the typed state returned by [`Behavior::enter`], owned by the
//! agent for exactly one activation and dropped when the step reports
//! [`StepOutcome::Done`].  Scene dimensions and randomness are passed in on
//! every call, so each behavior is a pure function of
//! `(state, body, bounds, dt, rng)`.

pub mod active;
pub mod kind;
pub mod model;
pub mod movement;
pub mod traverse;
pub mod wait;


pub use active::ActiveBehavior;
pub use kind::BehaviorKind;
pub use model::{Behavior, StepOutcome};
pub use movement::{MoveBehavior, MoveState};
pub use traverse::{TraverseBehavior, TraverseState};
pub use wait::{WaitBehavior, WaitState};
