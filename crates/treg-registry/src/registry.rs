//! # Credential Registry
//!
//! The registry state machine: two append-only record sets (issuance and
//! revocation) keyed by credential digest, a designated owner fixed at
//! construction, and the historical queries that compare recorded
//! positions against an arbitrary reference point.
//!
//! ## Invariants
//!
//! - A digest occupies each record set at most once; duplicate transitions
//!   are rejected and the original position is retained.
//! - Recorded positions are never the genesis sentinel (0); the sentinel
//!   is what makes the `*_before` queries sound.
//! - Record sets only grow. No operation mutates or removes an entry.
//! - `owner` and `name` are immutable after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use treg_core::{AccountId, CredentialDigest, LedgerPosition};

use crate::event::RegistryEvent;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from registry construction and transitions.
///
/// All deterministic and non-retryable: the same call against the same
/// state always reproduces the same error, and every rejection leaves
/// state unchanged.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller is not the registry owner.
    #[error("caller {caller} is not the registry owner")]
    Unauthorized {
        /// The rejected caller.
        caller: AccountId,
    },

    /// The digest was already issued.
    #[error("digest {digest} already issued at position {position}")]
    AlreadyIssued {
        /// The duplicate digest.
        digest: CredentialDigest,
        /// The position of the original issuance.
        position: LedgerPosition,
    },

    /// The digest was already revoked.
    #[error("digest {digest} already revoked at position {position}")]
    AlreadyRevoked {
        /// The duplicate digest.
        digest: CredentialDigest,
        /// The position of the original revocation.
        position: LedgerPosition,
    },

    /// The digest has no record where one is required.
    #[error("digest {digest} not found")]
    NotFound {
        /// The absent digest.
        digest: CredentialDigest,
    },

    /// The registry label must not be empty.
    #[error("registry name must not be empty")]
    EmptyName,

    /// A committed record may not carry the genesis sentinel position.
    #[error("position 0 is reserved and cannot be recorded")]
    GenesisPosition,
}

// ─── Registry ────────────────────────────────────────────────────────

/// A credential registry owned by a single issuing institution.
///
/// Created once, lives for the remainder of the ledger's history, and is
/// never destroyed. The serialized layout (`name`, `owner`, `issued_at`,
/// `revoked_at`) is stable: external verifiers read it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRegistry {
    /// Immutable human-readable label set at construction.
    name: String,
    /// The sole identity permitted to issue.
    owner: AccountId,
    /// Digest → position at which issuance committed. Absence = never issued.
    issued_at: BTreeMap<CredentialDigest, LedgerPosition>,
    /// Digest → position at which revocation committed. Absence = never revoked.
    revoked_at: BTreeMap<CredentialDigest, LedgerPosition>,
}

impl CredentialRegistry {
    /// Create a registry with the given label, owned by `owner`.
    ///
    /// The label must be non-empty; both record sets start empty.
    pub fn new(name: impl Into<String>, owner: AccountId) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        Ok(Self {
            name,
            owner,
            issued_at: BTreeMap::new(),
            revoked_at: BTreeMap::new(),
        })
    }

    /// The registry's human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identity permitted to issue.
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    // ─── Transitions ─────────────────────────────────────────────────

    /// Issue a credential-batch digest at the given ledger position.
    ///
    /// Only the owner may issue, and a digest can be issued at most once.
    /// On success the issuance record is inserted and a
    /// [`RegistryEvent::CertificateIssued`] notification is returned for
    /// the host's event channel.
    pub fn issue(
        &mut self,
        caller: &AccountId,
        digest: CredentialDigest,
        position: LedgerPosition,
    ) -> Result<RegistryEvent, RegistryError> {
        if caller != &self.owner {
            return Err(RegistryError::Unauthorized {
                caller: caller.clone(),
            });
        }
        if position.is_genesis() {
            return Err(RegistryError::GenesisPosition);
        }
        if let Some(&existing) = self.issued_at.get(&digest) {
            return Err(RegistryError::AlreadyIssued {
                digest,
                position: existing,
            });
        }
        self.issued_at.insert(digest, position);
        Ok(RegistryEvent::CertificateIssued { digest, position })
    }

    /// Revoke a digest (issued or not) at the given ledger position.
    ///
    /// Any caller may revoke — revocation is strictly safety-increasing,
    /// unlike issuance which asserts trust. Revoking a never-issued digest
    /// is permitted and serves as a pre-emptive "known bad" marker. The
    /// digest may be a batch root or an individual credential's own hash;
    /// the registry treats both as opaque.
    pub fn revoke(
        &mut self,
        digest: CredentialDigest,
        position: LedgerPosition,
    ) -> Result<RegistryEvent, RegistryError> {
        if position.is_genesis() {
            return Err(RegistryError::GenesisPosition);
        }
        if let Some(&existing) = self.revoked_at.get(&digest) {
            return Err(RegistryError::AlreadyRevoked {
                digest,
                position: existing,
            });
        }
        self.revoked_at.insert(digest, position);
        Ok(RegistryEvent::CertificateRevoked { digest, position })
    }

    // ─── Membership queries ──────────────────────────────────────────

    /// Whether the digest was ever issued.
    pub fn is_issued(&self, digest: &CredentialDigest) -> bool {
        self.issued_at.contains_key(digest)
    }

    /// Whether the digest was ever revoked.
    pub fn is_revoked(&self, digest: &CredentialDigest) -> bool {
        self.revoked_at.contains_key(digest)
    }

    /// The position at which the digest was issued.
    ///
    /// Fails with [`RegistryError::NotFound`] for never-issued digests —
    /// a 0 sentinel would be ambiguous with a legitimate-looking default.
    pub fn issued_position(
        &self,
        digest: &CredentialDigest,
    ) -> Result<LedgerPosition, RegistryError> {
        self.issued_at
            .get(digest)
            .copied()
            .ok_or(RegistryError::NotFound { digest: *digest })
    }

    /// The position at which the digest was revoked.
    ///
    /// Same absence rule as [`CredentialRegistry::issued_position`].
    pub fn revoked_position(
        &self,
        digest: &CredentialDigest,
    ) -> Result<LedgerPosition, RegistryError> {
        self.revoked_at
            .get(digest)
            .copied()
            .ok_or(RegistryError::NotFound { digest: *digest })
    }

    // ─── Historical queries ──────────────────────────────────────────

    /// Whether the digest was already issued at or before `reference`.
    ///
    /// True iff an issuance record exists and its position is ≤
    /// `reference`. Never fails: absent digests, references earlier than
    /// the record, and the genesis reference all yield `false`. The
    /// genesis rule holds by construction — no record can carry position
    /// 0, so a genesis reference compares before every record.
    pub fn is_issued_before(
        &self,
        digest: &CredentialDigest,
        reference: LedgerPosition,
    ) -> bool {
        recorded_at_or_before(&self.issued_at, digest, reference)
    }

    /// Whether the digest was already revoked at or before `reference`.
    ///
    /// Same policy as [`CredentialRegistry::is_issued_before`], over the
    /// revocation track.
    pub fn is_revoked_before(
        &self,
        digest: &CredentialDigest,
        reference: LedgerPosition,
    ) -> bool {
        recorded_at_or_before(&self.revoked_at, digest, reference)
    }
}

/// Shared `*_before` policy: recorded, at or before the reference, and
/// the reference is not the genesis sentinel.
fn recorded_at_or_before(
    records: &BTreeMap<CredentialDigest, LedgerPosition>,
    digest: &CredentialDigest,
    reference: LedgerPosition,
) -> bool {
    if reference.is_genesis() {
        return false;
    }
    match records.get(digest) {
        Some(&recorded) => recorded <= reference,
        None => false,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
