//! `pg-agent` — penguins and the population that owns them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`penguin`]   | `Penguin` (body + behavior state machine), `UpdateReport` |
//! | [`store`]     | `Population`, `AgentRngs`, `TickStats`                    |
//! | [`builder`]   | `PopulationBuilder` (spawn rules)                         |
//!
//! # State machine
//!
//! ```text
//! fresh ──first update──▶ Move ──Done──▶ (none) ──next update──▶ random kind ──Done──▶ (none) …
//! ```
//!
//! The reselection always happens on the update *after* the one whose step
//! reported `Done`; the agent spends that one frame with no behavior.

pub mod builder;
pub mod penguin;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use penguin::{Penguin, UpdateReport};
pub use store::{AgentRngs, Population, TickStats};
