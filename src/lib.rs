//! # ladder-game
//!
//! Engine for a sweepstake-style ladder game. Players pick a goal column
//! (and optionally a start column) on a randomly generated ladder; a token
//! descends the board, crossing every rung it meets, and the column it
//! lands on decides the payout.
//!
//! ## Design Principles
//!
//! 1. **Data In, Data Out**: Rendering, animation timing, balances and
//!    transport live with the host. The engine consumes picks and bets and
//!    returns boards, results and waypoint lists.
//!
//! 2. **Deterministic**: All randomness flows through an injected
//!    `RandomSource`. Same seed, same boards, same outcomes.
//!
//! 3. **Explicit Phases**: The round is a guarded state machine; an
//!    operation in the wrong phase fails and changes nothing.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, board and round configuration
//! - `board`: Rung matrix, constrained-random generator, path resolver
//! - `payout`: Multipliers, rewards, bet validation
//! - `round`: Round state machine and audit records
//! - `analysis`: Seeded return-to-player simulation

pub mod core;
pub mod board;
pub mod payout;
pub mod round;
pub mod analysis;

// Re-export commonly used types
pub use crate::core::{
    BoardSpec, ErrorKind, LadderConfig, LadderError, LadderRng, LadderRngState, RandomSource,
    Result,
};

pub use crate::board::{
    Board, BoardGenerator, Degradation, GenerationReport, PathResolver, PathTrace, Waypoint,
};

pub use crate::payout::{
    BalanceLedger, Bet, Payout, PayoutCalculator, PayoutConfig, WagerMode,
};

pub use crate::round::{RoundController, RoundRecord, RoundResult, RoundState, Selection};

pub use crate::analysis::ReturnStats;
