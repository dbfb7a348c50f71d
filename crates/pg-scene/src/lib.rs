//! `pg-scene` — everything between the simulation and the pixels.
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`assets`]       | `Assets` — penguin sprite + hill overlay, loaded up front |
//! | [`background`]   | `Background`, hill silhouette generation and compositing  |
//! | [`surface`]      | `SceneSurface` trait, `SpriteRect`                        |
//! | [`raster`]       | `RasterSurface` — software surface over an `RgbaImage`    |
//! | [`error`]        | `SceneError`, `SceneResult<T>`                            |
//!
//! Hosts with a GPU window implement [`SceneSurface`] themselves; the
//! raster surface serves offline rendering and tests.

pub mod assets;
pub mod background;
pub mod error;
pub mod raster;
pub mod surface;

#[cfg(test)]
mod tests;

pub use assets::Assets;
pub use background::{Background, HillProfile, generate_background};
pub use error::{SceneError, SceneResult};
pub use raster::RasterSurface;
pub use surface::{SceneSurface, SpriteRect};

/// Pixel buffer type used for assets, backgrounds, and raster frames.
pub use image::RgbaImage;
