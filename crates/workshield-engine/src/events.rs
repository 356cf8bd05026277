//! Engine events
//!
//! Each successful state transition emits exactly one event carrying the
//! relevant IDs and amounts, for external auditing and subscription. A
//! rejection decision changes no state and emits nothing. Events are
//! broadcast; slow subscribers lag rather than backpressure the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;
use workshield_common::{ClaimId, Identity, PolicyId};

/// Observable engine events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineEvent {
    /// A policy was purchased and the premium credited to the pool
    PolicyPurchased {
        policy_id: PolicyId,
        worker: Identity,
        premium: Decimal,
        coverage_amount: Decimal,
    },
    /// A claim was recorded against a policy
    ClaimSubmitted {
        claim_id: ClaimId,
        policy_id: PolicyId,
        claimant: Identity,
        claim_amount: Decimal,
    },
    /// A claim was approved by the owner
    ClaimApproved {
        claim_id: ClaimId,
        claim_amount: Decimal,
    },
    /// The approved amount was paid out to the claimant
    ClaimPaid {
        claim_id: ClaimId,
        claimant: Identity,
        claim_amount: Decimal,
    },
}

/// Broadcast bus for engine events
pub struct EventBus {
    tx: broadcast::Sender<EngineEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.tx.subscribe()
    }

    pub fn stream(&self) -> BroadcastStream<EngineEvent> {
        BroadcastStream::new(self.tx.subscribe())
    }

    /// Emit an event to all current subscribers
    ///
    /// Send only fails when no subscriber exists, which is fine: the
    /// transition already committed and auditing is optional.
    pub fn emit(&self, event: EngineEvent) {
        debug!(?event, "emitting engine event");
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_emit_without_subscribers_is_ok() {
        let bus = EventBus::new(16);
        bus.emit(EngineEvent::ClaimApproved {
            claim_id: 1,
            claim_amount: dec!(500),
        });
    }

    #[test]
    fn test_subscriber_receives_event() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let event = EngineEvent::PolicyPurchased {
            policy_id: 1,
            worker: Identity::new("worker-1"),
            premium: dec!(20),
            coverage_amount: dec!(1000),
        };
        bus.emit(event.clone());

        assert_eq!(rx.try_recv().unwrap(), event);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = EngineEvent::ClaimPaid {
            claim_id: 3,
            claimant: Identity::new("worker-1"),
            claim_amount: dec!(500),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ClaimPaid");
        assert_eq!(json["data"]["claim_id"], 3);
    }
}
