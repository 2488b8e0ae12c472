//! Board and round configuration.
//!
//! - `BoardSpec`: what board to generate (columns, rows, rung target)
//! - `LadderConfig`: payout factors and round behaviour
//!
//! Both are plain serde values so hosts can load them from whatever
//! settings store they use.

use serde::{Deserialize, Serialize};

use super::error::{LadderError, Result};
use super::rng::RandomSource;
use crate::payout::PayoutConfig;

/// Fewest vertical lines a generated board may have.
pub const MIN_COLUMNS: usize = 2;

/// Most vertical lines the setup adjusters will step up to.
///
/// Boards built directly from a `BoardSpec` may be wider.
pub const MAX_SELECTABLE_COLUMNS: usize = 5;

/// Fewest rows a generated board may have.
pub const MIN_ROWS: usize = 1;

/// Rungs allowed beyond one per gap before a target counts as "explicit".
const EXTRA_RUNG_ALLOWANCE: usize = 4;

/// Immutable description of a requested board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    /// Number of vertical lines.
    pub columns: usize,

    /// Number of horizontal steps.
    pub rows: usize,

    /// Requested total rung count. Clamped into `[columns-1, rows*(columns-1)]`
    /// by the generator.
    pub target_rungs: usize,

    /// Draw the extra rung count at random instead of using `target_rungs`.
    pub randomize: bool,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            columns: 3,
            rows: 10,
            target_rungs: 2,
            randomize: true,
        }
    }
}

impl BoardSpec {
    /// Create a spec with one rung per gap and no randomized fill.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            target_rungs: columns.saturating_sub(1),
            randomize: false,
        }
    }

    /// Set the target rung count.
    #[must_use]
    pub fn with_target_rungs(mut self, target: usize) -> Self {
        self.target_rungs = target;
        self
    }

    /// Draw the extra rung count at random.
    #[must_use]
    pub fn randomized(mut self) -> Self {
        self.randomize = true;
        self
    }

    /// Number of gaps between adjacent columns.
    #[must_use]
    pub fn gaps(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    /// The usual rung count range: one per gap up to `columns + 3`.
    #[must_use]
    pub fn rung_bounds(&self) -> (usize, usize) {
        (self.gaps(), self.columns + EXTRA_RUNG_ALLOWANCE - 1)
    }

    /// Check that a board can be generated from this spec.
    ///
    /// A single row cannot hold a rung for every gap once there are two or
    /// more gaps, because neighbouring rungs may not share a row.
    pub fn validate(&self) -> Result<()> {
        if self.columns < MIN_COLUMNS {
            return Err(LadderError::InvalidArgument(format!(
                "a board needs at least {MIN_COLUMNS} columns, got {}",
                self.columns
            )));
        }
        if self.rows < MIN_ROWS {
            return Err(LadderError::InvalidArgument(format!(
                "a board needs at least {MIN_ROWS} row, got {}",
                self.rows
            )));
        }
        let fits = self.columns.checked_add(EXTRA_RUNG_ALLOWANCE).is_some()
            && self.rows.checked_mul(self.gaps()).is_some();
        if !fits {
            return Err(LadderError::InvalidArgument(format!(
                "a {}x{} board is too large",
                self.columns, self.rows
            )));
        }
        if self.rows == 1 && self.gaps() > 1 {
            return Err(LadderError::InvalidArgument(format!(
                "{} columns cannot all be connected within a single row",
                self.columns
            )));
        }
        Ok(())
    }

    // === Setup adjusters ===

    /// Add a column, up to [`MAX_SELECTABLE_COLUMNS`]. Returns whether it changed.
    pub fn increase_columns(&mut self) -> bool {
        if self.columns >= MAX_SELECTABLE_COLUMNS {
            return false;
        }
        self.columns += 1;
        self.correct_target_rungs();
        true
    }

    /// Remove a column, down to [`MIN_COLUMNS`]. Returns whether it changed.
    pub fn decrease_columns(&mut self) -> bool {
        if self.columns <= MIN_COLUMNS {
            return false;
        }
        self.columns -= 1;
        self.correct_target_rungs();
        true
    }

    /// Raise the rung target by one, up to the upper rung bound.
    pub fn increase_target_rungs(&mut self) -> bool {
        let (_, max) = self.rung_bounds();
        if self.target_rungs >= max {
            return false;
        }
        self.target_rungs += 1;
        true
    }

    /// Lower the rung target by one, down to one rung per gap.
    pub fn decrease_target_rungs(&mut self) -> bool {
        let (min, _) = self.rung_bounds();
        if self.target_rungs <= min {
            return false;
        }
        self.target_rungs -= 1;
        true
    }

    /// Re-roll the rung target uniformly from `[max(1, columns-1), columns+3]`.
    pub fn roll_target_rungs<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let (min, max) = self.rung_bounds();
        self.target_rungs = rng.gen_inclusive(min.max(1), max);
    }

    fn correct_target_rungs(&mut self) {
        let (min, max) = self.rung_bounds();
        self.target_rungs = self.target_rungs.clamp(min, max);
    }
}

/// Round-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// House-edge factors for the payout calculator.
    pub payout: PayoutConfig,

    /// Regenerate the rung layout when the round is resolved.
    ///
    /// When false the round resolves against the board shown during
    /// selection.
    pub regenerate_on_resolve: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            payout: PayoutConfig::default(),
            regenerate_on_resolve: true,
        }
    }
}

impl LadderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payout factors.
    #[must_use]
    pub fn with_payout(mut self, payout: PayoutConfig) -> Self {
        self.payout = payout;
        self
    }

    /// Enable or disable resolve-time regeneration.
    #[must_use]
    pub fn with_regenerate_on_resolve(mut self, regenerate: bool) -> Self {
        self.regenerate_on_resolve = regenerate;
        self
    }

    /// Validate every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.payout.validate()
    }
}
