//! Policy - a purchased coverage agreement for one worker
//!
//! Policies are created exactly once by a successful purchase, never
//! deleted, and never mutated afterwards. The `active` flag is set at
//! creation and intentionally never cleared: expiry is enforced by
//! comparing the clock to `end_ms` at claim-submission time, so a policy
//! past its window still reports `active == true`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::identity::Identity;

/// Sequential policy identifier, starting at 1. 0 is never valid.
pub type PolicyId = u64;

/// A purchased coverage agreement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Sequential identifier
    pub id: PolicyId,

    /// Identity of the purchaser; immutable after creation
    pub worker: Identity,

    /// Premium actually paid (may exceed the computed minimum)
    pub premium: Decimal,

    /// Upper bound on any single claim against this policy
    pub coverage_amount: Decimal,

    /// Validity window start (Unix milliseconds)
    pub start_ms: i64,

    /// Validity window end (Unix milliseconds)
    pub end_ms: i64,

    /// Set true at creation; never cleared automatically
    pub active: bool,

    /// Free-text classification of the covered work
    pub work_type: String,
}

impl Policy {
    /// Whether the validity window has ended at `now_ms`
    ///
    /// Submission at exactly `end_ms` is still in the window.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.end_ms
    }

    /// Whether `amount` fits under the coverage bound
    pub fn covers(&self, amount: Decimal) -> bool {
        amount <= self.coverage_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn policy() -> Policy {
        Policy {
            id: 1,
            worker: Identity::new("worker-1"),
            premium: dec!(20),
            coverage_amount: dec!(1000),
            start_ms: 1_000,
            end_ms: 2_000,
            active: true,
            work_type: "construction".to_string(),
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let p = policy();
        assert!(!p.is_expired(1_500));
        assert!(!p.is_expired(2_000));
        assert!(p.is_expired(2_001));
    }

    #[test]
    fn test_coverage_bound() {
        let p = policy();
        assert!(p.covers(dec!(1000)));
        assert!(!p.covers(dec!(1000.01)));
    }
}
