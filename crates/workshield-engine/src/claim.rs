//! Claim store
//!
//! Creates, looks up, and settles claim records; owns the claim-ID
//! sequence. Submission only records intent — the fund ledger is not
//! consulted until the owner decides the claim. Settlement bookkeeping
//! (`settle`) is invoked solely by the engine's decide path, after the
//! payment transfer and ledger debit have succeeded.

use rust_decimal::Decimal;
use tracing::debug;
use workshield_common::{Claim, ClaimError, ClaimId, Identity, Policy};

/// In-memory claim records
#[derive(Debug, Default)]
pub struct ClaimStore {
    claims: Vec<Claim>,
}

impl ClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of claims ever submitted
    pub fn total(&self) -> u64 {
        self.claims.len() as u64
    }

    /// Validate and record a new claim against `policy`
    ///
    /// Preconditions are checked in a fixed order; the first failure wins
    /// and nothing is recorded.
    pub fn submit(
        &mut self,
        submitter: &Identity,
        policy: &Policy,
        claim_amount: Decimal,
        reason: &str,
        now_ms: i64,
    ) -> Result<&Claim, ClaimError> {
        if !policy.active {
            return Err(ClaimError::InvalidPolicy(policy.id));
        }
        if policy.worker != *submitter {
            return Err(ClaimError::NotPolicyHolder);
        }
        if policy.is_expired(now_ms) {
            return Err(ClaimError::PolicyExpired);
        }
        if claim_amount <= Decimal::ZERO {
            return Err(ClaimError::InvalidAmount);
        }
        if !policy.covers(claim_amount) {
            return Err(ClaimError::ClaimExceedsCoverage {
                claimed: claim_amount,
                coverage: policy.coverage_amount,
            });
        }
        if reason.is_empty() {
            return Err(ClaimError::MissingReason);
        }

        let id = self.total() + 1;
        self.claims.push(Claim {
            id,
            policy_id: policy.id,
            claimant: submitter.clone(),
            claim_amount,
            reason: reason.to_string(),
            approved: false,
            paid: false,
            submitted_ms: now_ms,
        });

        debug!(claim_id = id, policy_id = policy.id, "claim recorded");
        Ok(&self.claims[(id - 1) as usize])
    }

    /// Look up a claim by ID
    pub fn get(&self, id: ClaimId) -> Result<&Claim, ClaimError> {
        if id == 0 {
            return Err(ClaimError::ClaimNotFound(id));
        }
        self.claims
            .get((id - 1) as usize)
            .ok_or(ClaimError::ClaimNotFound(id))
    }

    /// Mark a claim approved and paid, exactly once
    pub fn settle(&mut self, id: ClaimId) -> Result<&Claim, ClaimError> {
        if id == 0 {
            return Err(ClaimError::ClaimNotFound(id));
        }
        let claim = self
            .claims
            .get_mut((id - 1) as usize)
            .ok_or(ClaimError::ClaimNotFound(id))?;

        if claim.paid {
            return Err(ClaimError::ClaimAlreadyPaid(id));
        }

        claim.settle();
        Ok(&self.claims[(id - 1) as usize])
    }
}
