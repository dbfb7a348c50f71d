//! Error types for pg-sim.

use pg_core::PgError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scene configuration error: {0}")]
    Config(#[from] PgError),
}

pub type SimResult<T> = Result<T, SimError>;
