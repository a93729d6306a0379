//! Error types for lattice operations.
//!
//! Out-of-bounds coordinates are never errors; they are absorbed by the
//! cell accessors. Everything here is either a contract violation
//! (using a lattice before it has a grid) or a settings-loading failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("lattice has not been initialized")]
    NotInitialized,

    #[error("invalid lattice size {0} (expected 1..={max})", max = crate::state::MAX_SIZE)]
    InvalidSize(i16),

    #[error("buffer holds {found} cells, lattice expects {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
