//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `PgError` as one
//! variant where they need it.

use thiserror::Error;

/// The top-level error type for `pg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PgError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pg-*` crates.
pub type PgResult<T> = Result<T, PgError>;
