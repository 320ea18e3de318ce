//! Error types for qubit state construction, gate construction and session commands.

use thiserror::Error;

/// Result type alias for qubit operations
pub type Result<T> = std::result::Result<T, QubitError>;

/// Why a matrix was rejected as a gate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateDefect {
    /// Wrong number of entries for a 2x2 matrix
    #[error("expected 4 entries for a 2x2 matrix, got {len}")]
    Shape { len: usize },
    /// An entry is NaN or infinite
    #[error("matrix has a non-finite entry")]
    NonFinite,
    /// Largest entry of `U^† U - I`, by magnitude
    #[error("matrix is not unitary (deviation {deviation:e})")]
    NotUnitary { deviation: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QubitError {
    #[error("invalid state: |a|^2 + |b|^2 = {norm}, expected 1")]
    InvalidState { norm: f64 },

    #[error("invalid gate: {0}")]
    InvalidGate(GateDefect),

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("invalid shot count: {0:?}")]
    InvalidShots(String),
}
