//! # Account Identity
//!
//! Newtype for caller identities. The hosting ledger authenticates
//! callers and hands this core an identity per operation; the registry
//! only ever *compares* identities — it never verifies keys or manages
//! custody.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdentityError;

/// The identity of an account as attested by the hosting ledger.
///
/// A validated non-empty string. Comparison is exact; the registry places
/// no further interpretation on the contents (a DID, an address, or a
/// bare label all work).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identity, rejecting empty or all-whitespace input.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(id))
    }

    /// Access the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_plain_labels() {
        let id = AccountId::new("registrar.acme").unwrap();
        assert_eq!(id.as_str(), "registrar.acme");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(AccountId::new("").is_err());
        assert!(AccountId::new("   ").is_err());
        assert!(AccountId::new("\t\n").is_err());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = AccountId::new("alice").unwrap();
        let b = AccountId::new("alice").unwrap();
        let c = AccountId::new("Alice").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = AccountId::new("did:example:issuer-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"did:example:issuer-1\"");
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<AccountId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        let id = AccountId::new("acme").unwrap();
        assert_eq!(format!("{id}"), "acme");
    }
}
