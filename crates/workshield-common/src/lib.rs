//! # Workshield Common
//!
//! Shared domain types, money math, and errors for the Workshield
//! policy/claim engine.
//!
//! ## Core Types
//!
//! - [`Identity`]: opaque authenticated caller identifier
//! - [`Policy`]: purchased coverage agreement for one worker
//! - [`Claim`]: request to draw against a policy's coverage
//! - [`FundLedger`]: pooled premium balance backing claim payouts
//!
//! ## Money
//!
//! All amounts are [`rust_decimal::Decimal`]. The minimum premium is a
//! fixed share of the coverage amount, rounded down (see [`premium`]).

pub mod error;
pub mod premium;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AccessError, ClaimError, PaymentError, PolicyError, Result, WorkshieldError};
pub use types::{
    claim::{Claim, ClaimId},
    fund::{FundLedger, LedgerError},
    identity::{Caller, Identity},
    policy::{Policy, PolicyId},
};

/// Workshield version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum premium rate: 2% of the coverage amount, rounded down
pub const PREMIUM_RATE_PERCENT: u32 = 2;

/// Milliseconds in a day, for duration arithmetic
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
