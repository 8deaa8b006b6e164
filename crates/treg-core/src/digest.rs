//! # Credential Digests
//!
//! Defines [`CredentialDigest`], the 32-byte opaque identifier under which
//! the registry records issuance and revocation. A digest may be the
//! Merkle root summarizing a credential batch or the SHA-256 hash of a
//! single credential document — the registry never distinguishes the two;
//! that convention belongs to callers.
//!
//! ## Serde
//!
//! Digests serialize as lowercase 64-character hex strings for JSON
//! interoperability with external verifiers that read registry state
//! directly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::DigestError;

/// A 32-byte credential-batch digest.
///
/// Opaque to the registry: batch Merkle roots and individual credential
/// hashes are both accepted wherever a digest is expected.
///
/// Implements `Ord` so record sets can live in `BTreeMap`s with a
/// deterministic iteration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CredentialDigest([u8; 32]);

impl CredentialDigest {
    /// Create a digest from raw 32 bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Compute the SHA-256 digest of a credential document's bytes.
    ///
    /// Convenience constructor for callers that register individual
    /// credentials rather than batch Merkle roots.
    pub fn sha256_of(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != 64 {
            return Err(DigestError::InvalidLength { got: hex.len() });
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.iter_mut().enumerate() {
            let offset = i * 2;
            let pair = hex
                .get(offset..offset + 2)
                .ok_or(DigestError::InvalidHex { position: offset })?;
            *chunk = u8::from_str_radix(pair, 16)
                .map_err(|_| DigestError::InvalidHex { position: offset })?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for CredentialDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CredentialDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for CredentialDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.iter().take(4).map(|b| format!("{b:02x}")).collect();
        write!(f, "CredentialDigest({prefix}...)")
    }
}

impl std::fmt::Display for CredentialDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hex rendering and parsing are inverses for any 32 bytes.
        #[test]
        fn hex_roundtrip(bytes in proptest::array::uniform32(proptest::num::u8::ANY)) {
            let digest = CredentialDigest::from_bytes(bytes);
            let parsed = CredentialDigest::from_hex(&digest.to_hex()).unwrap();
            prop_assert_eq!(digest, parsed);
        }

        /// Parsing never panics on arbitrary strings.
        #[test]
        fn from_hex_never_panics(input in ".{0,80}") {
            let _ = CredentialDigest::from_hex(&input);
        }
    }
}
