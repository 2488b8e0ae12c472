//! Constrained-random board generation.
//!
//! Generation runs in two phases:
//!
//! 1. **Guarantee**: every gap gets one rung, so every column pair is
//!    connected. Each gap tries up to `2 * rows` random rows, preferring
//!    rows not already used by another gap's guaranteed rung. If none fit
//!    the rung is forced onto a random row that still respects adjacency.
//! 2. **Fill**: extra rungs are scattered at random until the requested
//!    count is reached or `10 * requested` attempts have been spent.
//!
//! Adjacency is never traded away. Running out of fill attempts only makes
//! the board sparser, and is reported through [`GenerationReport::degraded`].

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Board;
use crate::core::{BoardSpec, LadderError, RandomSource, Result};

/// Row picks per gap in the guarantee phase, as a multiple of `rows`.
const GUARANTEE_ATTEMPTS_PER_ROW: usize = 2;

/// Fill attempts per requested extra rung.
const FILL_ATTEMPTS_PER_RUNG: usize = 10;

/// The fill phase stopped short of its target.
///
/// Informational only: the board is valid and usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degradation {
    /// Extra rungs the fill phase was asked for.
    pub requested: usize,
    /// Extra rungs it managed to place.
    pub placed: usize,
}

/// Diagnostics from one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Rungs placed by the guarantee phase (one per gap).
    pub guaranteed: usize,

    /// Guarantee rungs that had to ignore the distinct-row preference.
    pub forced: usize,

    /// Extra rungs requested from the fill phase.
    pub requested_additional: usize,

    /// Extra rungs actually placed.
    pub placed_additional: usize,

    /// Set when the fill phase ran out of attempts.
    pub degraded: Option<Degradation>,
}

impl GenerationReport {
    /// Total rungs on the generated board.
    #[must_use]
    pub fn total_rungs(&self) -> usize {
        self.guaranteed + self.placed_additional
    }

    /// Did the fill phase fall short?
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Produces boards from a [`BoardSpec`] and a random source.
///
/// Given the same spec and an identically seeded source, the output is
/// bit-identical.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a board.
    ///
    /// Fails with `InvalidArgument` if the spec is below the minimum size
    /// or cannot satisfy adjacency and coverage together.
    pub fn generate<R: RandomSource + ?Sized>(
        spec: &BoardSpec,
        rng: &mut R,
    ) -> Result<(Board, GenerationReport)> {
        spec.validate()?;

        let mut board = Board::empty(spec.columns, spec.rows);
        let mut report = GenerationReport::default();

        Self::guarantee_phase(&mut board, rng, &mut report)?;

        let additional = Self::additional_rungs(spec, rng);
        Self::fill_phase(&mut board, rng, additional, &mut report);

        debug!(
            "generated {}x{} board: {} guaranteed ({} forced), {}/{} extra",
            spec.columns,
            spec.rows,
            report.guaranteed,
            report.forced,
            report.placed_additional,
            report.requested_additional
        );
        Ok((board, report))
    }

    fn guarantee_phase<R: RandomSource + ?Sized>(
        board: &mut Board,
        rng: &mut R,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let rows = board.rows();
        let attempts = rows * GUARANTEE_ATTEMPTS_PER_ROW;
        let mut guarantee_rows = vec![false; rows];

        for gap in 0..board.gaps() {
            let picked = (0..attempts)
                .map(|_| rng.gen_index(rows))
                .find(|&y| !guarantee_rows[y] && board.can_place(y, gap));

            let row = match picked {
                Some(y) => y,
                None => {
                    let candidates: SmallVec<[usize; 16]> =
                        (0..rows).filter(|&y| board.can_place(y, gap)).collect();
                    if candidates.is_empty() {
                        return Err(LadderError::InvalidArgument(format!(
                            "no row can hold a rung for gap {gap}"
                        )));
                    }
                    let y = candidates[rng.gen_index(candidates.len())];
                    warn!("gap {gap}: no free row after {attempts} picks, forcing row {y}");
                    report.forced += 1;
                    y
                }
            };

            board.place(row, gap);
            guarantee_rows[row] = true;
            report.guaranteed += 1;
        }
        Ok(())
    }

    /// Extra rungs beyond one per gap.
    fn additional_rungs<R: RandomSource + ?Sized>(spec: &BoardSpec, rng: &mut R) -> usize {
        let gaps = spec.gaps();
        let capacity = spec.rows * gaps;
        if spec.randomize {
            let (_, max) = spec.rung_bounds();
            rng.gen_inclusive(0, max)
                .saturating_sub(gaps)
                .min(capacity - gaps)
        } else {
            spec.target_rungs.clamp(gaps, capacity) - gaps
        }
    }

    fn fill_phase<R: RandomSource + ?Sized>(
        board: &mut Board,
        rng: &mut R,
        additional: usize,
        report: &mut GenerationReport,
    ) {
        report.requested_additional = additional;
        let budget = additional * FILL_ATTEMPTS_PER_RUNG;
        let mut placed = 0;
        let mut attempts = 0;

        while placed < additional && attempts < budget {
            let y = rng.gen_index(board.rows());
            let x = rng.gen_index(board.gaps());
            if board.can_place(y, x) {
                board.place(y, x);
                placed += 1;
            }
            attempts += 1;
        }

        report.placed_additional = placed;
        if placed < additional {
            warn!("fill phase placed {placed} of {additional} extra rungs");
            report.degraded = Some(Degradation {
                requested: additional,
                placed,
            });
        }
    }
}
