//! The rung matrix for a single round.
//!
//! `rungs[y][x] == true` means a rung joins column `x` and `x + 1` at row
//! `y`. Storage is a flat row-major `Vec<bool>` with `columns - 1` entries
//! per row.
//!
//! ## Invariants
//!
//! - **No double adjacency**: a rung at `(y, x)` excludes rungs at
//!   `(y, x - 1)` and `(y, x + 1)`, so a token moves at most one column
//!   per row. Every constructor upholds this.
//! - **Coverage**: generated boards have at least one rung in every gap.
//!   Hand-built boards may not; see [`Board::is_fully_covered`].

use serde::{Deserialize, Serialize};

use super::path;
use crate::core::{LadderError, Result};

/// Immutable rung layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    columns: usize,
    rows: usize,
    rungs: Vec<bool>,
}

/// Wire shape of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    columns: usize,
    rows: usize,
    rungs: Vec<bool>,
}

impl TryFrom<RawBoard> for Board {
    type Error = LadderError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let board = Self {
            columns: raw.columns,
            rows: raw.rows,
            rungs: raw.rungs,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// A board with no rungs. Used by the generator as a starting point.
    pub(crate) fn empty(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            rungs: vec![false; rows * columns.saturating_sub(1)],
        }
    }

    /// Build a board from explicit rows of gap flags.
    ///
    /// Every row must have exactly `columns - 1` entries and no two
    /// neighbouring gaps in a row may both hold a rung. Coverage is not
    /// required, and `columns == 1` (no gaps at all) is accepted.
    pub fn from_rows(columns: usize, rows: Vec<Vec<bool>>) -> Result<Self> {
        if columns == 0 {
            return Err(LadderError::invalid_argument("a board needs at least 1 column"));
        }
        let gaps = columns - 1;
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != gaps) {
            return Err(LadderError::InvalidArgument(format!(
                "row {y} has {} gaps, expected {gaps}",
                row.len()
            )));
        }
        let board = Self {
            columns,
            rows: rows.len(),
            rungs: rows.concat(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Number of vertical lines.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of horizontal steps.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of gaps between adjacent columns.
    #[must_use]
    pub fn gaps(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    /// Is there a rung joining `gap` and `gap + 1` at `row`?
    ///
    /// Out-of-range coordinates simply have no rung.
    #[must_use]
    pub fn has_rung(&self, row: usize, gap: usize) -> bool {
        if row >= self.rows || gap >= self.gaps() {
            return false;
        }
        self.rungs[row * self.gaps() + gap]
    }

    /// One row of gap flags.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[bool] {
        let gaps = self.gaps();
        &self.rungs[row * gaps..(row + 1) * gaps]
    }

    /// Iterate rows top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows).map(move |y| self.row(y))
    }

    /// Total number of rungs.
    #[must_use]
    pub fn rung_count(&self) -> usize {
        self.rungs.iter().filter(|&&r| r).count()
    }

    /// Does `gap` hold at least one rung?
    #[must_use]
    pub fn is_gap_covered(&self, gap: usize) -> bool {
        (0..self.rows).any(|y| self.has_rung(y, gap))
    }

    /// Does every gap hold at least one rung?
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        (0..self.gaps()).all(|x| self.is_gap_covered(x))
    }

    /// Check the storage shape and the no-double-adjacency invariant.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(LadderError::invalid_argument("a board needs at least 1 column"));
        }
        let expected = self
            .rows
            .checked_mul(self.gaps())
            .ok_or_else(|| LadderError::invalid_argument("board dimensions overflow"))?;
        if self.rungs.len() != expected {
            return Err(LadderError::InvalidArgument(format!(
                "rung storage holds {} cells, expected {expected}",
                self.rungs.len()
            )));
        }
        for y in 0..self.rows {
            for x in 1..self.gaps() {
                if self.has_rung(y, x - 1) && self.has_rung(y, x) {
                    return Err(LadderError::InvalidArgument(format!(
                        "adjacent rungs at row {y}, gaps {} and {x}",
                        x - 1
                    )));
                }
            }
        }
        Ok(())
    }

    /// Arrival column for every start column.
    ///
    /// A ladder always maps starts to arrivals one-to-one, so the result is
    /// a permutation of `0..columns`.
    #[must_use]
    pub fn permutation(&self) -> Vec<usize> {
        (0..self.columns)
            .map(|start| path::descend(self, start, |_| {}))
            .collect()
    }

    /// Rows of gap flags as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows_iter().map(<[bool]>::to_vec).collect()
    }

    // === Generator support ===

    /// Can a rung go at `(row, gap)` without breaking adjacency?
    pub(crate) fn can_place(&self, row: usize, gap: usize) -> bool {
        let left = gap > 0 && self.has_rung(row, gap - 1);
        let right = self.has_rung(row, gap + 1);
        !(left || right || self.has_rung(row, gap))
    }

    pub(crate) fn place(&mut self, row: usize, gap: usize) {
        debug_assert!(self.can_place(row, gap));
        let gaps = self.gaps();
        self.rungs[row * gaps + gap] = true;
    }
}

impl std::fmt::Display for Board {
    /// Text rendering: `|-|` for a rung, `| |` for an open gap.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows_iter() {
            f.write_str("|")?;
            for &rung in row {
                f.write_str(if rung { "-|" } else { " |" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
