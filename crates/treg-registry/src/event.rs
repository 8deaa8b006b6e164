//! # Registry Events
//!
//! Observable notifications emitted by committed registry transitions.
//! The hosting ledger records these on its event channel so external
//! observers can follow issuance and revocation without reading registry
//! state directly.

use serde::{Deserialize, Serialize};

use treg_core::{CredentialDigest, LedgerPosition};

/// A notification emitted by a committed registry transition.
///
/// Serializes with an `event` tag so observers can dispatch on the kind
/// without knowing the full enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A credential-batch digest was issued.
    CertificateIssued {
        /// The issued digest.
        digest: CredentialDigest,
        /// The ledger position at which issuance committed.
        position: LedgerPosition,
    },

    /// A credential-batch digest was revoked.
    CertificateRevoked {
        /// The revoked digest.
        digest: CredentialDigest,
        /// The ledger position at which revocation committed.
        position: LedgerPosition,
    },
}

impl RegistryEvent {
    /// The digest this event concerns.
    pub fn digest(&self) -> &CredentialDigest {
        match self {
            Self::CertificateIssued { digest, .. } => digest,
            Self::CertificateRevoked { digest, .. } => digest,
        }
    }

    /// The ledger position at which the transition committed.
    pub fn position(&self) -> LedgerPosition {
        match self {
            Self::CertificateIssued { position, .. } => *position,
            Self::CertificateRevoked { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CertificateIssued { digest, position } => {
                write!(f, "CertificateIssued({digest} @ {position})")
            }
            Self::CertificateRevoked { digest, position } => {
                write!(f, "CertificateRevoked({digest} @ {position})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest() -> CredentialDigest {
        CredentialDigest::sha256_of(b"event-test")
    }

    #[test]
    fn test_accessors() {
        let event = RegistryEvent::CertificateIssued {
            digest: digest(),
            position: LedgerPosition::new(7),
        };
        assert_eq!(event.digest(), &digest());
        assert_eq!(event.position(), LedgerPosition::new(7));
    }

    #[test]
    fn test_serde_tagged_layout() {
        let event = RegistryEvent::CertificateRevoked {
            digest: digest(),
            position: LedgerPosition::new(3),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "certificate_revoked");
        assert_eq!(json["position"], 3);
        assert_eq!(json["digest"], digest().to_hex());

        let parsed: RegistryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_display_names_the_kind() {
        let event = RegistryEvent::CertificateIssued {
            digest: digest(),
            position: LedgerPosition::new(1),
        };
        let rendered = event.to_string();
        assert!(rendered.starts_with("CertificateIssued("));
        assert!(rendered.contains("@ 1"));
    }
}
