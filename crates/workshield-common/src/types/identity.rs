//! Identity - opaque authenticated caller identifier
//!
//! The engine never authenticates credentials itself. An external identity
//! source resolves each caller to an opaque identifier; the engine only
//! compares identities for equality (policy holder checks, owner checks).

use serde::{Deserialize, Serialize};

/// Opaque identity of an authenticated caller
///
/// The embedding layer decides what the string is (a DID, an account
/// address, a username). The engine treats it as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Caller context supplied by the identity source for every call
///
/// The identity source may fail to resolve an identity; the guard turns
/// that into an `Unauthenticated` error rather than this type panicking.
#[derive(Debug, Clone)]
pub struct Caller {
    identity: Option<Identity>,
}

impl Caller {
    /// A caller with a resolved identity
    pub fn identified(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// A caller the identity source could not resolve
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

impl From<Identity> for Caller {
    fn from(identity: Identity) -> Self {
        Self::identified(identity)
    }
}

impl From<&str> for Caller {
    fn from(s: &str) -> Self {
        Self::identified(Identity::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = Identity::new("worker-1");
        let b = Identity::from("worker-1");
        assert_eq!(a, b);
        assert_ne!(a, Identity::new("worker-2"));
    }

    #[test]
    fn test_anonymous_caller() {
        assert!(Caller::anonymous().identity().is_none());
        assert!(Caller::from("owner").identity().is_some());
    }
}
