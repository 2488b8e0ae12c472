//! Board generation and path resolution integration tests.
//!
//! These tests verify the placement invariants of generated boards and
//! the determinism and totality of path resolution.

use ladder_game::board::{Board, BoardGenerator, PathResolver};
use ladder_game::core::{BoardSpec, ErrorKind, LadderRng, RandomSource};
use proptest::prelude::*;

fn spec_strategy() -> impl Strategy<Value = BoardSpec> {
    (2usize..=8, 2usize..=15, 0usize..=20, any::<bool>()).prop_map(
        |(columns, rows, target, randomize)| {
            let spec = BoardSpec::new(columns, rows).with_target_rungs(target);
            if randomize {
                spec.randomized()
            } else {
                spec
            }
        },
    )
}

// =============================================================================
// Generation Invariants
// =============================================================================

proptest! {
    /// No row ever holds rungs in two neighbouring gaps.
    #[test]
    fn prop_no_adjacent_rungs(spec in spec_strategy(), seed in any::<u64>()) {
        let mut rng = LadderRng::new(seed);
        let (board, _) = BoardGenerator::generate(&spec, &mut rng).unwrap();

        for y in 0..board.rows() {
            for x in 1..board.gaps() {
                prop_assert!(!(board.has_rung(y, x - 1) && board.has_rung(y, x)));
            }
        }
        prop_assert!(board.validate().is_ok());
    }

    /// Every gap holds at least one rung.
    #[test]
    fn prop_every_gap_covered(spec in spec_strategy(), seed in any::<u64>()) {
        let mut rng = LadderRng::new(seed);
        let (board, report) = BoardGenerator::generate(&spec, &mut rng).unwrap();

        for x in 0..board.gaps() {
            prop_assert!((0..board.rows()).any(|y| board.has_rung(y, x)));
        }
        prop_assert_eq!(report.guaranteed, spec.columns - 1);
    }

    /// Same seed and spec give bit-identical boards.
    #[test]
    fn prop_generation_is_deterministic(spec in spec_strategy(), seed in any::<u64>()) {
        let (a, ra) = BoardGenerator::generate(&spec, &mut LadderRng::new(seed)).unwrap();
        let (b, rb) = BoardGenerator::generate(&spec, &mut LadderRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(ra, rb);
    }

    /// Rung totals stay within one-per-gap and the clamped target.
    #[test]
    fn prop_rung_count_bounds(spec in spec_strategy(), seed in any::<u64>()) {
        let mut rng = LadderRng::new(seed);
        let (board, report) = BoardGenerator::generate(&spec, &mut rng).unwrap();
        let (min, max) = spec.rung_bounds();

        prop_assert!(board.rung_count() >= min);
        prop_assert_eq!(board.rung_count(), report.total_rungs());
        if spec.randomize || spec.target_rungs <= max {
            prop_assert!(board.rung_count() <= max);
        }
    }

    /// Resolution terminates in range for every start, and the starts map
    /// one-to-one onto arrivals.
    #[test]
    fn prop_resolution_total_and_bijective(spec in spec_strategy(), seed in any::<u64>()) {
        let mut rng = LadderRng::new(seed);
        let (board, _) = BoardGenerator::generate(&spec, &mut rng).unwrap();

        let mut arrivals = Vec::new();
        for start in 0..board.columns() {
            let arrival = PathResolver::resolve(&board, start).unwrap();
            prop_assert!(arrival < board.columns());
            prop_assert_eq!(PathResolver::resolve(&board, start).unwrap(), arrival);
            arrivals.push(arrival);
        }
        arrivals.sort_unstable();
        prop_assert_eq!(arrivals, (0..board.columns()).collect::<Vec<_>>());
    }
}

// =============================================================================
// Substitutable Randomness
// =============================================================================

/// Always returns the largest index.
struct HighRng;

impl RandomSource for HighRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        upper - 1
    }
}

/// Test that any RandomSource can drive the generator.
#[test]
fn test_custom_random_source() {
    let spec = BoardSpec::new(3, 4);
    let (board, report) = BoardGenerator::generate(&spec, &mut HighRng).unwrap();

    // gap 0 takes the last row; gap 1 cannot share it and is forced elsewhere.
    assert!(board.has_rung(3, 0));
    assert!(board.is_fully_covered());
    assert_eq!(report.forced, 1);
    assert_eq!(board.rung_count(), 2);
}

// =============================================================================
// Path Resolution Edge Cases
// =============================================================================

/// Test that a single-column board always arrives at column 0.
#[test]
fn test_single_column_board() {
    let board = Board::from_rows(1, vec![vec![]; 4]).unwrap();
    assert_eq!(PathResolver::resolve(&board, 0).unwrap(), 0);
    assert_eq!(
        PathResolver::resolve(&board, 1).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

/// Test that a board with no rows leaves every token where it started.
#[test]
fn test_zero_rows() {
    let board = Board::from_rows(3, vec![]).unwrap();
    for start in 0..3 {
        assert_eq!(PathResolver::resolve(&board, start).unwrap(), start);
    }
}

/// Test that a token crosses at most one rung per row.
#[test]
fn test_one_crossing_per_row() {
    // Column 1 has a rung to its right in row 0; column 2 has none in row 1.
    let board = Board::from_rows(3, vec![vec![false, true], vec![true, false]]).unwrap();
    let trace = PathResolver::trace(&board, 1).unwrap();
    assert_eq!(trace.arrival, 2);
    assert_eq!(trace.lateral_moves(), 1);
}

/// Test that the trace has one waypoint per row plus one per crossing.
#[test]
fn test_trace_length() {
    let mut rng = LadderRng::new(2024);
    let spec = BoardSpec::new(5, 12).with_target_rungs(8);
    let (board, _) = BoardGenerator::generate(&spec, &mut rng).unwrap();

    for start in 0..board.columns() {
        let trace = PathResolver::trace(&board, start).unwrap();
        assert_eq!(trace.waypoints.len(), board.rows() + trace.lateral_moves());
        assert_eq!(trace.waypoints.first().map(|w| w.column), Some(start));
        assert_eq!(trace.waypoints.last().map(|w| w.column), Some(trace.arrival));
    }
}

/// Test that permutation agrees with resolving each start.
#[test]
fn test_permutation_matches_resolve() {
    let mut rng = LadderRng::new(8);
    let spec = BoardSpec::new(4, 10).randomized();
    let (board, _) = BoardGenerator::generate(&spec, &mut rng).unwrap();
    let perm = board.permutation();
    for (start, &arrival) in perm.iter().enumerate() {
        assert_eq!(PathResolver::resolve(&board, start).unwrap(), arrival);
    }
}
