//! Error types shared by every ladder operation.
//!
//! Public operations either complete with a well-defined new state or
//! return a [`LadderError`] and leave state untouched. A board that could
//! not be filled to its target rung count is *not* an error; see
//! [`crate::board::Degradation`].

use thiserror::Error;

use crate::round::RoundState;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LadderError>;

/// Coarse classification of a [`LadderError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied value is out of range or malformed.
    InvalidArgument,
    /// The operation is not permitted in the current round state.
    InvalidState,
    /// A bet exceeds the balance reported by the ledger.
    InsufficientBalance,
}

/// Errors produced by the ladder engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LadderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("`{operation}` is not permitted while the round is {state}")]
    InvalidState {
        operation: &'static str,
        state: RoundState,
    },

    #[error("bet of {bet} exceeds balance of {balance}")]
    InsufficientBalance { bet: f64, balance: f64 },
}

impl LadderError {
    /// Build an `InvalidArgument` error from anything printable.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LadderError::InvalidArgument(message.into())
    }

    /// Get the coarse kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            LadderError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LadderError::InvalidState { .. } => ErrorKind::InvalidState,
            LadderError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
        }
    }
}

/// Check that `column` indexes one of `columns` vertical lines.
pub(crate) fn check_column(column: usize, columns: usize) -> Result<()> {
    if column < columns {
        Ok(())
    } else {
        Err(LadderError::InvalidArgument(format!(
            "column {column} is outside 0..{columns}"
        )))
    }
}
