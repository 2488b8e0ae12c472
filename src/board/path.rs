//! Deterministic path resolution.
//!
//! A token starts at the top of a column and descends row by row. At each
//! row it crosses at most one rung: right is checked before left. After the
//! last row the token's column is the arrival column. There is no extra
//! descent step; any final drop animation belongs to the presenter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Board;
use crate::core::error::check_column;
use crate::core::Result;

/// A point on the token's path, in board coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Waypoint {
    pub row: usize,
    pub column: usize,
}

impl Waypoint {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Full movement sequence for one descent.
///
/// Each row contributes a waypoint where the token reaches it, plus a
/// second waypoint on the same row when a rung carries it sideways. An
/// animator can walk these at its own pace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTrace {
    pub start: usize,
    pub arrival: usize,
    /// SmallVec optimizes for typical board heights without heap allocation.
    pub waypoints: SmallVec<[Waypoint; 16]>,
}

impl PathTrace {
    /// Number of rungs the token crossed.
    #[must_use]
    pub fn lateral_moves(&self) -> usize {
        self.waypoints
            .windows(2)
            .filter(|pair| pair[0].row == pair[1].row)
            .count()
    }
}

/// Walks tokens through boards. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Arrival column for a token dropped at `start`.
    ///
    /// Fails with `InvalidArgument` if `start` is not a column of `board`.
    pub fn resolve(board: &Board, start: usize) -> Result<usize> {
        check_column(start, board.columns())?;
        Ok(descend(board, start, |_| {}))
    }

    /// Like [`PathResolver::resolve`], but also records every waypoint.
    pub fn trace(board: &Board, start: usize) -> Result<PathTrace> {
        check_column(start, board.columns())?;
        let mut waypoints: SmallVec<[Waypoint; 16]> = SmallVec::new();
        let arrival = descend(board, start, |step| {
            waypoints.push(Waypoint::new(step.row, step.from));
            if step.to != step.from {
                waypoints.push(Waypoint::new(step.row, step.to));
            }
        });
        Ok(PathTrace {
            start,
            arrival,
            waypoints,
        })
    }
}

/// One row of a descent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Step {
    pub row: usize,
    pub from: usize,
    pub to: usize,
}

/// Core walk. `start` must already be in range.
pub(crate) fn descend(board: &Board, start: usize, mut on_step: impl FnMut(Step)) -> usize {
    let mut current = start;
    for row in 0..board.rows() {
        let from = current;
        if current + 1 < board.columns() && board.has_rung(row, current) {
            current += 1;
        } else if current > 0 && board.has_rung(row, current - 1) {
            current -= 1;
        }
        on_step(Step {
            row,
            from,
            to: current,
        });
    }
    current
}
