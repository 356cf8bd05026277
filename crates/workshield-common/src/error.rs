//! Error types for the Workshield engine
//!
//! Provides a unified error type and domain-specific error variants.
//! Every failure is a pure precondition rejection: no operation leaves
//! partial state behind on error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::claim::ClaimId;
use crate::types::policy::PolicyId;

/// Result type alias using WorkshieldError
pub type Result<T> = std::result::Result<T, WorkshieldError>;

/// Unified error type for Workshield operations
#[derive(Debug, Error)]
pub enum WorkshieldError {
    // Authorization errors
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    // Policy validation errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    // Claim validation errors
    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),

    // Fund ledger errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] crate::types::fund::LedgerError),

    // Payment sink errors
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Authorization errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Caller identity could not be resolved")]
    Unauthenticated,

    #[error("Caller is not authorized for this operation")]
    NotAuthorized,
}

/// Policy purchase and lookup errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Coverage amount must be positive")]
    InvalidCoverage,

    #[error("Policy duration must be positive")]
    InvalidDuration,

    #[error("Premium below minimum: paid {paid}, required {required}")]
    InsufficientPremium { required: Decimal, paid: Decimal },

    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),
}

/// Claim submission and decision errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClaimError {
    #[error("Policy {0} does not exist or is not active")]
    InvalidPolicy(PolicyId),

    #[error("Submitter is not the policy holder")]
    NotPolicyHolder,

    #[error("Policy validity window has ended")]
    PolicyExpired,

    #[error("Claim amount must be positive")]
    InvalidAmount,

    #[error("Claim amount {claimed} exceeds coverage {coverage}")]
    ClaimExceedsCoverage { claimed: Decimal, coverage: Decimal },

    #[error("Claim reason must not be empty")]
    MissingReason,

    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Claim {0} has already been paid")]
    ClaimAlreadyPaid(ClaimId),
}

/// Payment sink errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Transfer to {recipient} failed: {reason}")]
    TransferFailed { recipient: String, reason: String },
}

// Implement From for common external error types
impl From<serde_json::Error> for WorkshieldError {
    fn from(err: serde_json::Error) -> Self {
        WorkshieldError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for WorkshieldError {
    fn from(err: anyhow::Error) -> Self {
        WorkshieldError::Internal(err.to_string())
    }
}
