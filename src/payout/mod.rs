//! Wagers and payouts.
//!
//! - [`PayoutCalculator`]: multiplier and reward from board width and mode
//! - [`Bet`] / [`BalanceLedger`]: bet validation against a host-owned balance
//!
//! Factors are house-edge configuration supplied by the host through
//! [`PayoutConfig`]; the calculator owns no policy of its own.

mod calculator;
mod wager;

pub use calculator::{Payout, PayoutCalculator, PayoutConfig, WagerMode};
pub use wager::{affordable_quick_bets, BalanceLedger, Bet, QUICK_BETS};
