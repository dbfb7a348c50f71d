//! Error types for pg-scene.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load asset `{name}` from {}: {source}", path.display())]
    Load {
        name:   &'static str,
        path:   PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("asset `{0}` has zero width or height")]
    EmptyAsset(&'static str),

    #[error("failed to save frame to {}: {source}", path.display())]
    Save {
        path:   PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type SceneResult<T> = Result<T, SceneError>;
