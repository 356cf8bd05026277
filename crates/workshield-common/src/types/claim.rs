//! Claim - a request to draw against a policy's coverage
//!
//! `approved` and `paid` start false and transition together, exactly
//! once, on a successful administrative approval. There is no terminal
//! "rejected" state: a decision of "reject" leaves the record untouched
//! and the claim stays eligible for a later decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::identity::Identity;
use crate::types::policy::PolicyId;

/// Sequential claim identifier, starting at 1. 0 is never valid.
pub type ClaimId = u64;

/// A claim against a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Sequential identifier
    pub id: ClaimId,

    /// Referenced policy; many claims may reference one policy
    pub policy_id: PolicyId,

    /// Identity of the submitter (equals the policy's worker)
    pub claimant: Identity,

    /// Amount requested; at most the policy's coverage amount
    pub claim_amount: Decimal,

    /// Non-empty description of the loss
    pub reason: String,

    /// Set together with `paid` on successful approval
    pub approved: bool,

    /// Set together with `approved`; a paid claim is never re-decided
    pub paid: bool,

    /// Submission timestamp (Unix milliseconds)
    pub submitted_ms: i64,
}

impl Claim {
    /// Whether this claim has been settled
    pub fn is_settled(&self) -> bool {
        self.paid
    }

    /// Mark the claim approved and paid
    ///
    /// Called only by the engine's decide path, after the ledger debit
    /// and the payment transfer have succeeded.
    pub fn settle(&mut self) {
        self.approved = true;
        self.paid = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_settle_sets_both_flags() {
        let mut claim = Claim {
            id: 1,
            policy_id: 1,
            claimant: Identity::new("worker-1"),
            claim_amount: dec!(500),
            reason: "accident".to_string(),
            approved: false,
            paid: false,
            submitted_ms: 1_000,
        };
        assert!(!claim.is_settled());

        claim.settle();
        assert!(claim.approved);
        assert!(claim.paid);
        assert!(claim.is_settled());
    }
}
