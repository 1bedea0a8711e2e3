//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one
//! variant via `#[from]`, so configuration failures keep their message all the
//! way up to the engine builder.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EpiError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid disease stage code {0} (expected 0..=5)")]
    InvalidStage(u8),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
