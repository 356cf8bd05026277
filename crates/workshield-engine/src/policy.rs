//! Policy store
//!
//! Creates and looks up policy records. Owns the monotonically increasing
//! policy-ID sequence and the per-worker index. IDs are assigned
//! sequentially from 1, so the live IDs are always the contiguous range
//! `[1, total]` and records live in a Vec indexed by `id - 1`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;
use workshield_common::{premium, Identity, Policy, PolicyError, PolicyId};

/// In-memory policy records plus the per-worker index
#[derive(Debug, Default)]
pub struct PolicyStore {
    policies: Vec<Policy>,
    by_worker: HashMap<Identity, Vec<PolicyId>>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of policies ever created
    pub fn total(&self) -> u64 {
        self.policies.len() as u64
    }

    /// Validate and store a new policy
    ///
    /// All preconditions are checked before anything is allocated, so a
    /// failed purchase consumes no ID and stores nothing.
    pub fn purchase(
        &mut self,
        worker: Identity,
        coverage_amount: Decimal,
        duration_ms: i64,
        work_type: &str,
        paid_amount: Decimal,
        now_ms: i64,
    ) -> Result<&Policy, PolicyError> {
        if coverage_amount <= Decimal::ZERO {
            return Err(PolicyError::InvalidCoverage);
        }
        if duration_ms <= 0 {
            return Err(PolicyError::InvalidDuration);
        }
        let required = premium::minimum_premium(coverage_amount);
        if paid_amount <= Decimal::ZERO || paid_amount < required {
            return Err(PolicyError::InsufficientPremium {
                required,
                paid: paid_amount,
            });
        }

        let id = self.total() + 1;
        let policy = Policy {
            id,
            worker: worker.clone(),
            premium: paid_amount,
            coverage_amount,
            start_ms: now_ms,
            end_ms: now_ms + duration_ms,
            active: true,
            work_type: work_type.to_string(),
        };

        self.policies.push(policy);
        self.by_worker.entry(worker).or_default().push(id);

        debug!(policy_id = id, "policy stored");
        Ok(&self.policies[(id - 1) as usize])
    }

    /// Look up a policy by ID
    pub fn get(&self, id: PolicyId) -> Result<&Policy, PolicyError> {
        if id == 0 {
            return Err(PolicyError::PolicyNotFound(id));
        }
        self.policies
            .get((id - 1) as usize)
            .ok_or(PolicyError::PolicyNotFound(id))
    }

    /// Policy IDs purchased by `worker`, in insertion order
    pub fn worker_policies(&self, worker: &Identity) -> &[PolicyId] {
        self.by_worker
            .get(worker)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
