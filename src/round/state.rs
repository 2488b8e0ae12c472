//! Round phase, player selection, and settled results.

use serde::{Deserialize, Serialize};

use crate::payout::WagerMode;

/// Phase of a round.
///
/// ```text
/// Idle -> BoardReady <-> GoalSelected -> Resolving -> Resolved -> Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// No round in progress.
    #[default]
    Idle,
    /// A board is up; waiting for a goal.
    BoardReady,
    /// A goal (and optionally a start) is chosen; ready to resolve.
    GoalSelected,
    /// Resolution in progress. Never observable between calls.
    Resolving,
    /// Result available until acknowledged.
    Resolved,
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundState::Idle => "Idle",
            RoundState::BoardReady => "BoardReady",
            RoundState::GoalSelected => "GoalSelected",
            RoundState::Resolving => "Resolving",
            RoundState::Resolved => "Resolved",
        };
        f.write_str(name)
    }
}

/// Columns the player has picked this round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Column the player expects the token to arrive at.
    pub goal_column: Option<usize>,

    /// Column the token starts from. Random at resolve time when unset.
    pub start_column: Option<usize>,
}

impl Selection {
    /// Forget both picks.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goal_column.is_none() && self.start_column.is_none()
    }
}

/// Settled outcome of one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub start_column: usize,
    pub arrival_column: usize,
    pub goal_column: usize,
    pub success: bool,
    pub mode: WagerMode,
    pub bet_amount: f64,
    pub multiplier: f64,
    pub reward: f64,
}

impl RoundResult {
    /// Balance change for the host to apply: reward minus stake.
    #[must_use]
    pub fn net_delta(&self) -> f64 {
        self.reward - self.bet_amount
    }
}
