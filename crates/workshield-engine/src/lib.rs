//! # Workshield Engine
//!
//! Ledger-backed policy/claim management engine: issues insurance
//! policies against a paid premium, accepts claims against those
//! policies, and lets a single owner identity approve and settle claims
//! out of a pooled fund.
//!
//! ## Components
//!
//! - **Guard**: caller authentication and owner-only checks
//! - **Policy store**: policy records, ID sequence, per-worker index
//! - **Claim store**: claim records, ID sequence, settle-once bookkeeping
//! - **Fund ledger**: pooled balance, credited by premiums, debited by payouts
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       InsuranceEngine                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────┐  ┌──────────────┐ ┌─────────────┐ ┌──────────┐  │
//! │  │  Guard  │──│ Policy Store │─│ Claim Store │─│  Ledger  │  │
//! │  └─────────┘  └──────────────┘ └─────────────┘ └──────────┘  │
//! │       │            seams: Clock · PaymentSink · EventBus     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutating operations (purchase, submit, decide, withdraw) hold the
//! state write lock for their entire duration, including the awaited
//! payment transfer, so the ledger and record sequences are never
//! observable in a partially-updated state. Read-only queries take the
//! read lock and run concurrently with each other.

pub mod claim;
pub mod clock;
pub mod events;
pub mod guard;
pub mod payment;
pub mod policy;

pub use claim::ClaimStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{EngineEvent, EventBus};
pub use guard::AccessGuard;
pub use payment::{NullPaymentSink, PaymentSink};
pub use policy::PolicyStore;

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::{broadcast, RwLock};
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, instrument, warn};
use workshield_common::{
    Caller, Claim, ClaimError, ClaimId, FundLedger, Identity, LedgerError, Policy, PolicyId,
    Result,
};

/// Default capacity of the event broadcast channel
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Identity allowed to decide claims and drain the pool
    pub owner: Identity,
    /// Capacity of the event broadcast channel
    pub event_capacity: usize,
}

impl EngineConfig {
    pub fn new(owner: Identity) -> Self {
        Self {
            owner,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Load configuration from the environment
    ///
    /// Reads `WORKSHIELD_OWNER` (required) and
    /// `WORKSHIELD_EVENT_CAPACITY` (optional), honoring a `.env` file.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let owner = std::env::var("WORKSHIELD_OWNER")
            .map_err(|_| anyhow::anyhow!("WORKSHIELD_OWNER is not set"))?;
        let mut cfg = Self::new(Identity::new(owner));

        if let Ok(val) = std::env::var("WORKSHIELD_EVENT_CAPACITY") {
            if let Ok(v) = val.parse() {
                cfg.event_capacity = v;
            }
        }

        Ok(cfg)
    }
}

/// All mutable engine state, guarded by one lock
#[derive(Debug, Default)]
struct EngineState {
    policies: PolicyStore,
    claims: ClaimStore,
    ledger: FundLedger,
}

/// The policy/claim management engine
///
/// Construct once at startup with the owner identity and pass to every
/// caller; there is no ambient/global state.
pub struct InsuranceEngine {
    guard: AccessGuard,
    state: RwLock<EngineState>,
    clock: Arc<dyn Clock>,
    payment: Arc<dyn PaymentSink>,
    events: EventBus,
}

impl InsuranceEngine {
    /// Create an engine with the system clock and the null payment sink
    pub fn new(config: EngineConfig) -> Self {
        Self {
            guard: AccessGuard::new(config.owner),
            state: RwLock::new(EngineState::default()),
            clock: Arc::new(SystemClock),
            payment: Arc::new(NullPaymentSink),
            events: EventBus::new(config.event_capacity),
        }
    }

    /// Replace the clock (deterministic tests)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the payment sink
    pub fn with_payment_sink(mut self, payment: Arc<dyn PaymentSink>) -> Self {
        self.payment = payment;
        self
    }

    /// The configured owner identity
    pub fn owner(&self) -> &Identity {
        self.guard.owner()
    }

    /// Subscribe to engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Engine events as a stream
    pub fn event_stream(&self) -> BroadcastStream<EngineEvent> {
        self.events.stream()
    }

    /// Purchase a policy; open to any authenticated caller
    ///
    /// Credits the paid premium to the pooled fund and returns the new
    /// policy ID. Fails atomically: no ID is consumed and nothing is
    /// credited on a precondition violation.
    #[instrument(skip(self, caller))]
    pub async fn purchase_policy(
        &self,
        caller: &Caller,
        coverage_amount: Decimal,
        duration_ms: i64,
        work_type: &str,
        paid_amount: Decimal,
    ) -> Result<PolicyId> {
        let worker = self.guard.require_authenticated(caller)?;
        let now_ms = self.clock.now_ms();

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let (policy_id, premium) = {
            let policy = state.policies.purchase(
                worker.clone(),
                coverage_amount,
                duration_ms,
                work_type,
                paid_amount,
                now_ms,
            )?;
            (policy.id, policy.premium)
        };
        // Cannot fail: purchase already rejected non-positive premiums
        state.ledger.credit(paid_amount)?;

        info!(policy_id, worker = %worker, %paid_amount, "policy purchased");
        self.events.emit(EngineEvent::PolicyPurchased {
            policy_id,
            worker,
            premium,
            coverage_amount,
        });
        Ok(policy_id)
    }

    /// Look up a policy
    pub async fn get_policy(&self, id: PolicyId) -> Result<Policy> {
        Ok(self.state.read().await.policies.get(id)?.clone())
    }

    /// Policy IDs purchased by `worker`, in insertion order
    pub async fn worker_policies(&self, worker: &Identity) -> Vec<PolicyId> {
        self.state.read().await.policies.worker_policies(worker).to_vec()
    }

    /// Submit a claim against a policy
    ///
    /// Records intent only; the fund ledger is untouched until the owner
    /// decides the claim.
    #[instrument(skip(self, caller, reason))]
    pub async fn submit_claim(
        &self,
        caller: &Caller,
        policy_id: PolicyId,
        claim_amount: Decimal,
        reason: &str,
    ) -> Result<ClaimId> {
        let claimant = self.guard.require_authenticated(caller)?;
        let now_ms = self.clock.now_ms();

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let policy = state
            .policies
            .get(policy_id)
            .map_err(|_| ClaimError::InvalidPolicy(policy_id))?;
        let claim_id = state
            .claims
            .submit(&claimant, policy, claim_amount, reason, now_ms)?
            .id;

        info!(claim_id, policy_id, claimant = %claimant, %claim_amount, "claim submitted");
        self.events.emit(EngineEvent::ClaimSubmitted {
            claim_id,
            policy_id,
            claimant,
            claim_amount,
        });
        Ok(claim_id)
    }

    /// Look up a claim
    pub async fn get_claim(&self, id: ClaimId) -> Result<Claim> {
        Ok(self.state.read().await.claims.get(id)?.clone())
    }

    /// Decide a pending claim; owner-only
    ///
    /// `approve == false` changes no state at all: the claim stays
    /// pending and may be decided again later (there is no terminal
    /// rejected state). `approve == true` requires the pool to cover the
    /// claim amount and settles it exactly once.
    ///
    /// Ordering: the payment transfer is attempted first, because the
    /// sink cannot be rolled back; the `{approved, paid, debit}` commit
    /// happens only after the sink reports success. The write lock is
    /// held across the transfer, so no observer sees a paid flag without
    /// the matching debit.
    #[instrument(skip(self, caller))]
    pub async fn decide_claim(
        &self,
        caller: &Caller,
        claim_id: ClaimId,
        approve: bool,
    ) -> Result<()> {
        let decider = self.guard.require_authenticated(caller)?;
        self.guard.require_owner(&decider)?;

        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let claim = state.claims.get(claim_id)?;
        if claim.paid {
            return Err(ClaimError::ClaimAlreadyPaid(claim_id).into());
        }

        if !approve {
            debug!(claim_id, "claim rejected; record left pending");
            return Ok(());
        }

        let claimant = claim.claimant.clone();
        let amount = claim.claim_amount;

        if !state.ledger.can_cover(amount) {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available: state.ledger.balance(),
            }
            .into());
        }

        self.payment.transfer(&claimant, amount).await?;

        state.ledger.debit(amount)?;
        state.claims.settle(claim_id)?;

        info!(claim_id, claimant = %claimant, %amount, "claim approved and paid");
        self.events.emit(EngineEvent::ClaimApproved {
            claim_id,
            claim_amount: amount,
        });
        self.events.emit(EngineEvent::ClaimPaid {
            claim_id,
            claimant,
            claim_amount: amount,
        });
        Ok(())
    }

    /// Current pooled balance
    pub async fn balance(&self) -> Decimal {
        self.state.read().await.ledger.balance()
    }

    /// Number of policies ever created
    pub async fn total_policies(&self) -> u64 {
        self.state.read().await.policies.total()
    }

    /// Number of claims ever submitted
    pub async fn total_claims(&self) -> u64 {
        self.state.read().await.claims.total()
    }

    /// Drain the entire pool to the owner; owner-only
    ///
    /// Administrative escape hatch. Policy and claim state is untouched,
    /// so pending claims become unpayable until further premium
    /// purchases refund the pool. Payment-before-commit ordering as in
    /// [`decide_claim`](Self::decide_claim).
    #[instrument(skip(self, caller))]
    pub async fn emergency_withdraw(&self, caller: &Caller) -> Result<Decimal> {
        let requester = self.guard.require_authenticated(caller)?;
        self.guard.require_owner(&requester)?;

        let mut state = self.state.write().await;
        let amount = state.ledger.balance();
        if amount.is_zero() {
            return Ok(Decimal::ZERO);
        }

        self.payment.transfer(self.guard.owner(), amount).await?;
        let drained = state.ledger.drain();

        warn!(%drained, "emergency withdraw: pool drained to owner");
        Ok(drained)
    }
}
