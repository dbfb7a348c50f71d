//! `pg-core` — foundational types for the penguin scene.
//!
//! This crate is a dependency of every other `pg-*` crate.  It has no `pg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde` and `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`body`]        | `Body` (position + facing), `Direction`               |
//! | [`bounds`]      | `SceneBounds`, edge margin and snow-line constants    |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (scene-level)        |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `PgError`, `PgResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, and   |
//! |         | JSON loading via `SimConfig::from_json_path`/`from_env`.   |

pub mod body;
pub mod bounds;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use body::{Body, Direction};
pub use bounds::{EDGE_MARGIN, FOOT_OFFSET, SNOW_LINE, SceneBounds};
pub use config::SimConfig;
pub use error::{PgError, PgResult};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{Frame, FrameClock};
