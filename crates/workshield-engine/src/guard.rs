//! Identity & access guard
//!
//! Pure precondition checks consulted by every mutating operation:
//! resolve the caller's identity and, where required, enforce that the
//! caller is the configured owner. The guard holds no state beyond the
//! owner identity.

use tracing::warn;
use workshield_common::{AccessError, Caller, Identity};

/// Role checks against the configured owner identity
#[derive(Debug, Clone)]
pub struct AccessGuard {
    owner: Identity,
}

impl AccessGuard {
    pub fn new(owner: Identity) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// Resolve the caller's identity
    ///
    /// Fails with `Unauthenticated` when the identity source supplied no
    /// identity. Not expected in normal operation.
    pub fn require_authenticated(&self, caller: &Caller) -> Result<Identity, AccessError> {
        match caller.identity() {
            Some(identity) => Ok(identity.clone()),
            None => {
                warn!("rejected call from unauthenticated caller");
                Err(AccessError::Unauthenticated)
            }
        }
    }

    /// Enforce that `identity` is the configured owner
    pub fn require_owner(&self, identity: &Identity) -> Result<(), AccessError> {
        if *identity != self.owner {
            warn!(caller = %identity, "rejected owner-only call");
            return Err(AccessError::NotAuthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_authenticated() {
        let guard = AccessGuard::new(Identity::new("owner"));

        assert!(guard.require_authenticated(&Caller::from("worker-1")).is_ok());
        assert_eq!(
            guard.require_authenticated(&Caller::anonymous()),
            Err(AccessError::Unauthenticated)
        );
    }

    #[test]
    fn test_require_owner() {
        let guard = AccessGuard::new(Identity::new("owner"));

        assert!(guard.require_owner(&Identity::new("owner")).is_ok());
        assert_eq!(
            guard.require_owner(&Identity::new("worker-1")),
            Err(AccessError::NotAuthorized)
        );
    }
}
