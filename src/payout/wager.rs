//! Bets and the balance collaborator.
//!
//! The engine never moves money. A host-owned [`BalanceLedger`] holds the
//! player's coins; the engine only checks a bet against it and reports the
//! net change for the host to apply.

use serde::Serialize;

use crate::core::{LadderError, Result};

/// Preset bet amounts offered as quick-bet buttons.
pub const QUICK_BETS: [f64; 5] = [1.0, 5.0, 10.0, 50.0, 100.0];

/// Host-side balance store.
pub trait BalanceLedger {
    /// Current balance.
    fn balance(&self) -> f64;

    /// Add `amount` (negative to debit).
    fn apply_delta(&mut self, amount: f64);
}

/// A validated, strictly positive wager amount.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
pub struct Bet(f64);

impl Bet {
    /// Validate a bet amount.
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LadderError::InvalidArgument(format!(
                "bet must be a positive amount, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Validate a bet amount and check it against the ledger balance.
    pub fn checked<L: BalanceLedger + ?Sized>(amount: f64, ledger: &L) -> Result<Self> {
        let bet = Self::new(amount)?;
        let balance = ledger.balance();
        if amount > balance {
            return Err(LadderError::InsufficientBalance {
                bet: amount,
                balance,
            });
        }
        Ok(bet)
    }

    #[must_use]
    pub fn amount(self) -> f64 {
        self.0
    }
}

/// Quick-bet presets the player can currently afford.
#[must_use]
pub fn affordable_quick_bets(balance: f64) -> Vec<f64> {
    QUICK_BETS.iter().copied().filter(|&b| b <= balance).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    struct Wallet(f64);

    impl BalanceLedger for Wallet {
        fn balance(&self) -> f64 {
            self.0
        }

        fn apply_delta(&mut self, amount: f64) {
            self.0 += amount;
        }
    }

    #[test]
    fn test_bet_new() {
        assert_eq!(Bet::new(2.5).unwrap().amount(), 2.5);
        assert!(Bet::new(0.0).is_err());
        assert!(Bet::new(-3.0).is_err());
        assert!(Bet::new(f64::INFINITY).is_err());
        assert!(Bet::new(f64::NAN).is_err());
    }

    #[test]
    fn test_bet_serializes_as_amount() {
        let bet = Bet::new(2.5).unwrap();
        assert_eq!(serde_json::to_string(&bet).unwrap(), "2.5");
    }

    #[test]
    fn test_bet_checked_against_balance() {
        let wallet = Wallet(10.0);
        assert!(Bet::checked(10.0, &wallet).is_ok());

        let err = Bet::checked(10.5, &wallet).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientBalance);

        let err = Bet::checked(0.0, &wallet).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_ledger_delta() {
        let mut wallet = Wallet(10.0);
        wallet.apply_delta(-4.0);
        wallet.apply_delta(7.5);
        assert_eq!(wallet.balance(), 13.5);
    }

    #[test]
    fn test_affordable_quick_bets() {
        assert_eq!(affordable_quick_bets(0.0), Vec::<f64>::new());
        assert_eq!(affordable_quick_bets(12.0), vec![1.0, 5.0, 10.0]);
        assert_eq!(affordable_quick_bets(500.0), QUICK_BETS.to_vec());
    }
}
