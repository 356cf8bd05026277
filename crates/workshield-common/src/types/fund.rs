//! Fund ledger - the pooled premium balance
//!
//! A single non-negative balance, increased by every accepted premium
//! payment and decreased by every paid claim. `debit` rejects overdraws
//! outright, leaving the balance unchanged; the pooled invariant
//! `balance == premiums collected - claims paid` holds at all times.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fund ledger operation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Amount must be positive")]
    InvalidAmount,
}

/// Pooled fund balance backing claim payouts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundLedger {
    balance: Decimal,
}

impl FundLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            balance: Decimal::ZERO,
        }
    }

    /// Current pooled balance; never fails
    #[inline]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credit a collected premium to the pool
    pub fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        Ok(())
    }

    /// Debit a claim payout from the pool
    ///
    /// Fails without touching the balance when the pool cannot cover
    /// the amount.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    /// Whether the pool can cover `amount`
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Zero the balance and return what was pooled (emergency withdraw)
    pub fn drain(&mut self) -> Decimal {
        std::mem::take(&mut self.balance)
    }
}

impl std::fmt::Display for FundLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FundLedger(balance={})", self.balance)
    }
}
