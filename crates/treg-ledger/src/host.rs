//! # Registry Host
//!
//! Owns one [`CredentialRegistry`] together with the sequence clock and
//! the commit journal, and executes operations one at a time with
//! all-or-nothing semantics. Committed operations are journaled with a
//! transaction id, the assigned position, a UTC timestamp, the caller,
//! and the emitted event — the journal is the event channel observers
//! read.
//!
//! ## Snapshots
//!
//! The whole host serializes to JSON so a CLI (or any embedding process)
//! can persist state between invocations. Loading validates that the
//! clock has not fallen behind the journal; a snapshot that disagrees
//! with its own history is refused rather than silently repaired.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use treg_core::{AccountId, CredentialDigest, LedgerPosition, PositionError, Timestamp};
use treg_registry::{CredentialRegistry, RegistryError, RegistryEvent};

use crate::clock::SequenceClock;

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors from host execution and snapshot persistence.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The registry rejected the operation; state is unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The position counter cannot advance past the current commit.
    #[error(transparent)]
    Position(#[from] PositionError),

    /// The requested starting position is the reserved genesis sentinel.
    #[error("a host cannot start at the genesis sentinel position")]
    GenesisStart,

    /// The snapshot's clock disagrees with its journal.
    #[error("snapshot clock at {clock} does not follow last committed position {committed}")]
    InconsistentSnapshot {
        /// The clock's next position as recorded in the snapshot.
        clock: LedgerPosition,
        /// The highest position in the snapshot's journal.
        committed: LedgerPosition,
    },

    /// Snapshot (de)serialization failed.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot file IO failed.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Commit journal ──────────────────────────────────────────────────

/// One committed operation, as recorded on the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Transaction id assigned at commit.
    pub tx_id: Uuid,
    /// The ledger position this commit carries.
    pub position: LedgerPosition,
    /// When the commit was applied (UTC, seconds precision).
    pub timestamp: Timestamp,
    /// The authenticated caller who submitted the operation.
    pub caller: AccountId,
    /// The event the registry emitted.
    pub event: RegistryEvent,
}

// ─── Host ────────────────────────────────────────────────────────────

/// A sequenced, journaled host for one credential registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryHost {
    registry: CredentialRegistry,
    clock: SequenceClock,
    journal: Vec<CommitRecord>,
}

impl RegistryHost {
    /// Create a host around a freshly constructed registry.
    ///
    /// The first committed operation will carry position 1.
    pub fn open(name: impl Into<String>, owner: AccountId) -> Result<Self, LedgerError> {
        Ok(Self {
            registry: CredentialRegistry::new(name, owner)?,
            clock: SequenceClock::new(),
            journal: Vec::new(),
        })
    }

    /// Create a host whose first committed operation carries `first`.
    ///
    /// Used when this host takes over numbering from an existing ordered
    /// history. The genesis sentinel is not a valid start.
    pub fn open_at(
        name: impl Into<String>,
        owner: AccountId,
        first: LedgerPosition,
    ) -> Result<Self, LedgerError> {
        let clock = SequenceClock::starting_at(first).ok_or(LedgerError::GenesisStart)?;
        Ok(Self {
            registry: CredentialRegistry::new(name, owner)?,
            clock,
            journal: Vec::new(),
        })
    }

    /// The hosted registry, for read-only queries.
    pub fn registry(&self) -> &CredentialRegistry {
        &self.registry
    }

    /// The position the next commit will carry.
    pub fn next_position(&self) -> LedgerPosition {
        self.clock.peek()
    }

    /// All committed operations, in commit order.
    pub fn journal(&self) -> &[CommitRecord] {
        &self.journal
    }

    /// All emitted events, in commit order.
    pub fn events(&self) -> impl Iterator<Item = &RegistryEvent> {
        self.journal.iter().map(|record| &record.event)
    }

    // ─── Operations ──────────────────────────────────────────────────

    /// Issue a digest as `caller` at the next position.
    ///
    /// Owner-gated by the registry. On rejection neither the clock nor
    /// the journal advances.
    pub fn issue(
        &mut self,
        caller: &AccountId,
        digest: CredentialDigest,
    ) -> Result<CommitRecord, LedgerError> {
        self.apply(caller, |registry, position| {
            registry.issue(caller, digest, position)
        })
    }

    /// Revoke a digest as `caller` at the next position.
    ///
    /// Open to any caller; the caller is journaled for observability
    /// even though the registry does not gate on it.
    pub fn revoke(
        &mut self,
        caller: &AccountId,
        digest: CredentialDigest,
    ) -> Result<CommitRecord, LedgerError> {
        self.apply(caller, |registry, position| registry.revoke(digest, position))
    }

    /// Execute one registry transition atomically.
    ///
    /// Overflow of the position counter is checked before the registry is
    /// touched, so every failure path leaves registry, clock, and journal
    /// exactly as they were.
    fn apply<F>(&mut self, caller: &AccountId, transition: F) -> Result<CommitRecord, LedgerError>
    where
        F: FnOnce(&mut CredentialRegistry, LedgerPosition) -> Result<RegistryEvent, RegistryError>,
    {
        let position = self.clock.peek();
        position.next()?;

        let event = match transition(&mut self.registry, position) {
            Ok(event) => event,
            Err(err) => {
                tracing::debug!(%position, caller = %caller, error = %err, "operation rejected");
                return Err(err.into());
            }
        };

        // Cannot fail: overflow was ruled out above and the clock has not moved.
        let assigned = self.clock.advance()?;
        debug_assert_eq!(assigned, position);

        let record = CommitRecord {
            tx_id: Uuid::new_v4(),
            position,
            timestamp: Timestamp::now(),
            caller: caller.clone(),
            event,
        };
        tracing::info!(%position, caller = %caller, event = %record.event, "operation committed");
        self.journal.push(record.clone());
        Ok(record)
    }

    // ─── Snapshots ───────────────────────────────────────────────────

    /// Serialize the host to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a host from a JSON snapshot.
    ///
    /// Refuses snapshots whose clock is at or behind the highest
    /// journaled position — accepting one would let a future commit reuse
    /// a position number.
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        let host: Self = serde_json::from_str(json)?;
        if let Some(last) = host.journal.last() {
            if host.clock.peek() <= last.position {
                return Err(LedgerError::InconsistentSnapshot {
                    clock: host.clock.peek(),
                    committed: last.position,
                });
            }
        }
        Ok(host)
    }

    /// Write a JSON snapshot to `path`.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load a host from the JSON snapshot at `path`.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
