//! Round state machine.
//!
//! `RoundController` sequences one play cycle: generate a board, collect
//! the player's goal (and optional start), resolve the token's path, and
//! settle the payout. Every operation is guarded by the current
//! [`RoundState`]; a call that is not allowed fails with `InvalidState` and
//! changes nothing.
//!
//! ## Transitions
//!
//! | Operation      | From                              | To             |
//! |----------------|-----------------------------------|----------------|
//! | `start_round`  | Idle, BoardReady, GoalSelected    | BoardReady     |
//! | `select_goal`  | BoardReady, GoalSelected          | GoalSelected (same column again: BoardReady) |
//! | `select_start` | GoalSelected                      | GoalSelected   |
//! | `resolve`      | GoalSelected                      | Resolved       |
//! | `acknowledge`  | Resolved                          | Idle           |
//!
//! ## Rung targets
//!
//! The controller generates exactly the [`BoardSpec`] it is handed. Hosts
//! that re-roll the rung target for every new board call
//! [`BoardSpec::roll_target_rungs`] before `start_round`.

use log::{debug, info};

use super::record::RoundRecord;
use super::state::{RoundResult, RoundState, Selection};
use crate::board::{Board, BoardGenerator, GenerationReport, PathResolver, PathTrace};
use crate::core::error::check_column;
use crate::core::{BoardSpec, LadderConfig, LadderError, LadderRng, RandomSource, Result};
use crate::payout::{Bet, PayoutCalculator, WagerMode};

/// Everything `resolve` produces before it is committed.
struct Resolution {
    board: Option<(Board, GenerationReport)>,
    trace: PathTrace,
    result: RoundResult,
}

/// Drives a single player's rounds.
///
/// Generic over the random source so tests can substitute a seeded or
/// scripted one.
pub struct RoundController<R: RandomSource = LadderRng> {
    config: LadderConfig,
    calculator: PayoutCalculator,
    rng: R,
    state: RoundState,
    spec: Option<BoardSpec>,
    board: Option<Board>,
    report: Option<GenerationReport>,
    selection: Selection,
    result: Option<RoundResult>,
    trace: Option<PathTrace>,
}

impl RoundController<LadderRng> {
    /// Create a controller backed by a seeded [`LadderRng`].
    pub fn with_seed(config: LadderConfig, seed: u64) -> Result<Self> {
        Self::new(config, LadderRng::new(seed))
    }
}

impl<R: RandomSource> RoundController<R> {
    /// Create a controller in the `Idle` state.
    pub fn new(config: LadderConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calculator: PayoutCalculator::new(config.payout.clone()),
            config,
            rng,
            state: RoundState::Idle,
            spec: None,
            board: None,
            report: None,
            selection: Selection::default(),
            result: None,
            trace: None,
        })
    }

    // === Operations ===

    /// Generate a fresh board and discard any previous selection.
    pub fn start_round(&mut self, spec: BoardSpec) -> Result<()> {
        self.require(
            "start_round",
            &[RoundState::Idle, RoundState::BoardReady, RoundState::GoalSelected],
        )?;

        let (board, report) = BoardGenerator::generate(&spec, &mut self.rng)?;

        self.board = Some(board);
        self.report = Some(report);
        self.spec = Some(spec);
        self.selection.clear();
        self.result = None;
        self.trace = None;
        self.transition(RoundState::BoardReady);
        Ok(())
    }

    /// Pick the goal column. Picking the current goal again deselects it.
    pub fn select_goal(&mut self, column: usize) -> Result<()> {
        self.require("select_goal", &[RoundState::BoardReady, RoundState::GoalSelected])?;
        check_column(column, self.columns("select_goal")?)?;

        if self.selection.goal_column == Some(column) {
            self.selection.clear();
            self.transition(RoundState::BoardReady);
        } else {
            self.selection.goal_column = Some(column);
            self.transition(RoundState::GoalSelected);
        }
        Ok(())
    }

    /// Pick the start column. Picking the current start again deselects it.
    pub fn select_start(&mut self, column: usize) -> Result<()> {
        self.require("select_start", &[RoundState::GoalSelected])?;
        check_column(column, self.columns("select_start")?)?;

        if self.selection.start_column == Some(column) {
            self.selection.start_column = None;
        } else {
            self.selection.start_column = Some(column);
        }
        debug!("start column now {:?}", self.selection.start_column);
        Ok(())
    }

    /// Settle the round.
    ///
    /// Draws a random start if none was picked, regenerates the rung layout
    /// when configured to, walks the token, and computes the payout.
    /// `GoalAndStart` requires an explicitly picked start.
    pub fn resolve(&mut self, bet_amount: f64, mode: WagerMode) -> Result<RoundResult> {
        self.require("resolve", &[RoundState::GoalSelected])?;
        let bet = Bet::new(bet_amount)?;
        if mode == WagerMode::GoalAndStart && self.selection.start_column.is_none() {
            return Err(LadderError::invalid_argument(
                "goal+start wagers need a selected start column",
            ));
        }

        let previous = self.state;
        self.state = RoundState::Resolving;
        let resolution = match self.run_resolution(bet, mode) {
            Ok(resolution) => resolution,
            Err(err) => {
                self.state = previous;
                return Err(err);
            }
        };

        if let Some((board, report)) = resolution.board {
            self.board = Some(board);
            self.report = Some(report);
        }
        let result = resolution.result;
        info!(
            "round resolved: start {} -> arrival {}, goal {}, {} at {:.2}x, reward {:.2}",
            result.start_column,
            result.arrival_column,
            result.goal_column,
            if result.success { "won" } else { "lost" },
            result.multiplier,
            result.reward
        );
        self.trace = Some(resolution.trace);
        self.result = Some(result.clone());
        self.transition(RoundState::Resolved);
        Ok(result)
    }

    /// Close a resolved round once the presenter has shown it.
    pub fn acknowledge(&mut self) -> Result<()> {
        self.require("acknowledge", &[RoundState::Resolved])?;
        self.result = None;
        self.trace = None;
        self.selection.clear();
        self.transition(RoundState::Idle);
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn current_state(&self) -> RoundState {
        self.state
    }

    /// The active board, if a round has been started.
    #[must_use]
    pub fn current_board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn current_selection(&self) -> &Selection {
        &self.selection
    }

    /// Result of the last resolve, until acknowledged.
    #[must_use]
    pub fn current_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Waypoints of the resolved descent, for the animator.
    #[must_use]
    pub fn current_trace(&self) -> Option<&PathTrace> {
        self.trace.as_ref()
    }

    /// Diagnostics from the most recent board generation.
    #[must_use]
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    /// Spec the active board was generated from.
    #[must_use]
    pub fn current_spec(&self) -> Option<&BoardSpec> {
        self.spec.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// What a win would pay on the current board.
    pub fn preview(&self, bet_amount: f64, mode: WagerMode) -> Result<f64> {
        if matches!(self.state, RoundState::Idle | RoundState::Resolved) {
            return Err(LadderError::InvalidState {
                operation: "preview",
                state: self.state,
            });
        }
        self.calculator
            .potential_reward(self.columns("preview")?, bet_amount, mode)
    }

    /// Audit record of the resolved round.
    #[must_use]
    pub fn record(&self) -> Option<RoundRecord> {
        let board = self.board.as_ref()?;
        let result = self.result.as_ref()?;
        Some(RoundRecord::new(board, result))
    }

    // === Internals ===

    fn run_resolution(&mut self, bet: Bet, mode: WagerMode) -> Result<Resolution> {
        let spec = self
            .spec
            .clone()
            .ok_or_else(|| self.invalid_state("resolve"))?;
        let goal = self
            .selection
            .goal_column
            .ok_or_else(|| self.invalid_state("resolve"))?;

        let start = match self.selection.start_column {
            Some(start) => start,
            None => self.rng.gen_index(spec.columns),
        };

        let regenerated = if self.config.regenerate_on_resolve {
            Some(BoardGenerator::generate(&spec, &mut self.rng)?)
        } else {
            None
        };
        let board = match (&regenerated, &self.board) {
            (Some((board, _)), _) | (None, Some(board)) => board,
            (None, None) => return Err(self.invalid_state("resolve")),
        };

        let trace = PathResolver::trace(board, start)?;
        let success = trace.arrival == goal;
        let payout = self
            .calculator
            .calculate(board.columns(), bet.amount(), mode, success)?;

        let result = RoundResult {
            start_column: start,
            arrival_column: trace.arrival,
            goal_column: goal,
            success,
            mode,
            bet_amount: bet.amount(),
            multiplier: payout.multiplier,
            reward: payout.reward,
        };
        Ok(Resolution {
            board: regenerated,
            trace,
            result,
        })
    }

    fn columns(&self, operation: &'static str) -> Result<usize> {
        self.board
            .as_ref()
            .map(Board::columns)
            .ok_or_else(|| self.invalid_state(operation))
    }

    fn require(&self, operation: &'static str, allowed: &[RoundState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(self.invalid_state(operation))
        }
    }

    fn invalid_state(&self, operation: &'static str) -> LadderError {
        LadderError::InvalidState {
            operation,
            state: self.state,
        }
    }

    fn transition(&mut self, next: RoundState) {
        debug!("round {} -> {}", self.state, next);
        self.state = next;
    }
}
