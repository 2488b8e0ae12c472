//! Compact audit record of a resolved round.
//!
//! Carries enough to re-derive the outcome independently: the rung layout,
//! both columns, the stake and the mode. Hosts forward it to whatever
//! settles rewards server-side.

use serde::{Deserialize, Serialize};

use super::state::RoundResult;
use crate::board::{Board, PathResolver};
use crate::core::error::check_column;
use crate::core::{LadderError, Result};
use crate::payout::{Bet, WagerMode};

/// Serializable snapshot of one settled round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub columns: usize,
    pub rows: usize,
    pub start_column: usize,
    pub goal_column: usize,
    pub arrival_column: usize,
    pub bet_amount: f64,
    pub mode: WagerMode,
    pub rungs: Vec<Vec<bool>>,
}

impl RoundRecord {
    /// Capture a board and the result resolved on it.
    pub fn new(board: &Board, result: &RoundResult) -> Self {
        Self {
            columns: board.columns(),
            rows: board.rows(),
            start_column: result.start_column,
            goal_column: result.goal_column,
            arrival_column: result.arrival_column,
            bet_amount: result.bet_amount,
            mode: result.mode,
            rungs: board.to_rows(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| LadderError::InvalidArgument(format!("cannot encode round record: {e}")))
    }

    /// Decode and validate a record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let record: Self = bincode::deserialize(bytes)
            .map_err(|e| LadderError::InvalidArgument(format!("cannot decode round record: {e}")))?;
        record.validate()?;
        Ok(record)
    }

    /// Rebuild the board, checking shape and adjacency.
    pub fn board(&self) -> Result<Board> {
        if self.rungs.len() != self.rows {
            return Err(LadderError::InvalidArgument(format!(
                "record declares {} rows but carries {}",
                self.rows,
                self.rungs.len()
            )));
        }
        Board::from_rows(self.columns, self.rungs.clone())
    }

    /// Re-derive the arrival column from the recorded layout.
    pub fn replay(&self) -> Result<usize> {
        PathResolver::resolve(&self.board()?, self.start_column)
    }

    /// Check the board and the recorded columns and stake.
    pub fn validate(&self) -> Result<()> {
        self.board()?;
        check_column(self.start_column, self.columns)?;
        check_column(self.goal_column, self.columns)?;
        check_column(self.arrival_column, self.columns)?;
        Bet::new(self.bet_amount)?;
        Ok(())
    }

    /// Does the recorded arrival match a fresh replay?
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.replay().map_or(false, |arrival| arrival == self.arrival_column)
    }
}
