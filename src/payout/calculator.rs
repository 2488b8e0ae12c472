//! Multiplier and reward calculation.

use serde::{Deserialize, Serialize};

use super::wager::Bet;
use crate::core::{LadderError, Result};

/// How the player wagered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagerMode {
    /// Only the arrival column was chosen; the start is random.
    GoalOnly,
    /// Both the start and the arrival column were chosen.
    GoalAndStart,
}

impl std::fmt::Display for WagerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WagerMode::GoalOnly => f.write_str("goal-only"),
            WagerMode::GoalAndStart => f.write_str("goal+start"),
        }
    }
}

/// House-edge tuning for the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// Scales the goal multiplier (`columns * goal_factor`).
    pub goal_factor: f64,

    /// Extra scale applied in goal+start mode.
    pub start_factor: f64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            goal_factor: 0.5,
            start_factor: 1.0,
        }
    }
}

impl PayoutConfig {
    /// Set the goal factor.
    #[must_use]
    pub fn with_goal_factor(mut self, factor: f64) -> Self {
        self.goal_factor = factor;
        self
    }

    /// Set the start factor.
    #[must_use]
    pub fn with_start_factor(mut self, factor: f64) -> Self {
        self.start_factor = factor;
        self
    }

    /// Both factors must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        let factors = [
            ("goal_factor", self.goal_factor),
            ("start_factor", self.start_factor),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(LadderError::InvalidArgument(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a payout calculation. No rounding is applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub multiplier: f64,
    pub reward: f64,
}

/// Computes multipliers and rewards from board width and wager mode.
#[derive(Clone, Debug, Default)]
pub struct PayoutCalculator {
    config: PayoutConfig,
}

impl PayoutCalculator {
    /// Create a calculator with the given factors.
    pub fn new(config: PayoutConfig) -> Self {
        Self { config }
    }

    /// The factors in use.
    #[must_use]
    pub fn config(&self) -> &PayoutConfig {
        &self.config
    }

    /// Multiplier for a board `columns` wide.
    ///
    /// - goal-only: `columns * goal_factor`
    /// - goal+start: `columns^2 * goal_factor * start_factor`
    #[must_use]
    pub fn multiplier(&self, columns: usize, mode: WagerMode) -> f64 {
        let columns = columns as f64;
        match mode {
            WagerMode::GoalOnly => columns * self.config.goal_factor,
            WagerMode::GoalAndStart => {
                columns * columns * self.config.goal_factor * self.config.start_factor
            }
        }
    }

    /// Multiplier and reward for a settled wager.
    ///
    /// Fails with `InvalidArgument` for a non-positive bet or an empty board.
    pub fn calculate(
        &self,
        columns: usize,
        bet_amount: f64,
        mode: WagerMode,
        success: bool,
    ) -> Result<Payout> {
        let bet = Bet::new(bet_amount)?;
        check_columns(columns)?;

        let multiplier = self.multiplier(columns, mode);
        let reward = if success { bet.amount() * multiplier } else { 0.0 };
        Ok(Payout { multiplier, reward })
    }

    /// What a win would pay, shown before the round is resolved.
    pub fn potential_reward(
        &self,
        columns: usize,
        bet_amount: f64,
        mode: WagerMode,
    ) -> Result<f64> {
        self.calculate(columns, bet_amount, mode, true)
            .map(|payout| payout.reward)
    }
}

fn check_columns(columns: usize) -> Result<()> {
    if columns == 0 {
        return Err(LadderError::invalid_argument("payout needs at least 1 column"));
    }
    Ok(())
}
