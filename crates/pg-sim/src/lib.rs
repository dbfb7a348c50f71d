//! `pg-sim` — the scene and the loop that animates it.
//!
//! # Frame loop
//!
//! ```text
//! every host frame(now_ms):
//!   ① delta      — (now_ms - last_render_ms) / 1000
//!   ② background — surface.clear(); surface.draw_background()
//!   ③ update     — Penguin::update(delta) for every penguin, in ID order
//!   ④ draw       — one sprite per penguin, mirrored when facing left
//!   ⑤ record     — last_render_ms = now_ms; observer hooks
//! ```
//!
//! Everything runs on the host's frame thread; a frame runs to completion
//! before the host schedules the next one.  Resizes are applied between
//! frames via [`Scene::resize`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pg_core::SimConfig;
//! use pg_scene::{Assets, RasterSurface};
//! use pg_sim::{FrameDriver, NoopObserver, SceneBuilder};
//!
//! let assets = Assets::load(&config.assets_dir)?;
//! let mut surface = RasterSurface::new(assets.penguin.clone(), config.bounds());
//! let mut scene = SceneBuilder::new(config, assets).build()?;
//! let mut driver = FrameDriver::start(0.0);
//! driver.run_fixed(600, 1000.0 / 60.0, &mut scene, &mut surface, &mut NoopObserver);
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod scene;


pub use builder::SceneBuilder;
pub use driver::FrameDriver;
pub use error::{SimError, SimResult};
pub use observer::{FrameObserver, NoopObserver};
pub use scene::Scene;
