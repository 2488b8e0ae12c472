//! Round orchestration.
//!
//! [`RoundController`] owns the board, selection and result for the current
//! round and exposes guarded operations for the UI layer. Presentation,
//! animation timing and balances stay outside; the controller hands out
//! plain data ([`RoundResult`], [`crate::board::PathTrace`]) for them.
//!
//! ## Example
//!
//! ```
//! use ladder_game::core::{BoardSpec, LadderConfig};
//! use ladder_game::payout::WagerMode;
//! use ladder_game::round::{RoundController, RoundState};
//!
//! let mut round = RoundController::with_seed(LadderConfig::default(), 7).unwrap();
//! round.start_round(BoardSpec::new(3, 10)).unwrap();
//! round.select_goal(1).unwrap();
//!
//! let result = round.resolve(5.0, WagerMode::GoalOnly).unwrap();
//! assert_eq!(result.multiplier, 1.5);
//! assert_eq!(round.current_state(), RoundState::Resolved);
//!
//! round.acknowledge().unwrap();
//! assert_eq!(round.current_state(), RoundState::Idle);
//! ```

mod controller;
mod record;
mod state;

pub use controller::RoundController;
pub use record::RoundRecord;
pub use state::{RoundResult, RoundState, Selection};
