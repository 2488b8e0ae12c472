//! Aggregate wagering statistics.

use serde::{Deserialize, Serialize};

use crate::round::RoundResult;

/// Totals over a batch of settled rounds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    /// Rounds settled.
    pub rounds: u32,

    /// Rounds where the token reached the goal.
    pub wins: u32,

    /// Sum of stakes.
    pub total_wagered: f64,

    /// Sum of rewards paid out.
    pub total_paid: f64,
}

impl ReturnStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result into the totals.
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        if result.success {
            self.wins += 1;
        }
        self.total_wagered += result.bet_amount;
        self.total_paid += result.reward;
    }

    /// Fraction of rounds won.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }

    /// Paid out per unit wagered.
    #[must_use]
    pub fn return_to_player(&self) -> f64 {
        if self.total_wagered == 0.0 {
            0.0
        } else {
            self.total_paid / self.total_wagered
        }
    }

    /// House profit per unit wagered.
    #[must_use]
    pub fn house_edge(&self) -> f64 {
        if self.total_wagered == 0.0 {
            0.0
        } else {
            1.0 - self.return_to_player()
        }
    }
}
