//! Payment sink seam
//!
//! The engine never holds external value itself: settling a claim or an
//! emergency withdraw hands an identity and an amount to the payment
//! sink, which moves value to that identity's external account. The
//! engine commits the matching ledger debit and flag updates only after
//! the sink reports success.

use async_trait::async_trait;
use rust_decimal::Decimal;
use workshield_common::{Identity, PaymentError};

/// External value transfer
#[async_trait]
pub trait PaymentSink: Send + Sync {
    /// Transfer `amount` to `to`'s external account
    async fn transfer(&self, to: &Identity, amount: Decimal) -> Result<(), PaymentError>;
}

/// Payment sink that accepts every transfer
///
/// Default sink for embeddings where payout delivery is handled outside
/// the engine (the engine still enforces ledger coverage).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPaymentSink;

#[async_trait]
impl PaymentSink for NullPaymentSink {
    async fn transfer(&self, _to: &Identity, _amount: Decimal) -> Result<(), PaymentError> {
        Ok(())
    }
}
