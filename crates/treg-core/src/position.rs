//! # Ledger Positions
//!
//! Defines [`LedgerPosition`], the monotonically increasing number a
//! hosting ledger assigns to each committed operation.
//!
//! ## The Genesis Sentinel
//!
//! Position 0 is reserved: it means "before the beginning of recorded
//! history" and no committed record may ever carry it. Real records are
//! numbered from 1. The historical `*_before` queries rely on this —
//! a genesis reference position compares before every record, so those
//! queries are always false at genesis. This conflation of "absent" and
//! "genesis" is load-bearing for external verifiers and must not be
//! reinterpreted.

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// A position in the hosting ledger's total order of committed operations.
///
/// Strictly increasing across commits. `LedgerPosition::GENESIS` (0) is a
/// reserved sentinel; the first real position is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerPosition(u64);

impl LedgerPosition {
    /// The reserved "before recorded history" sentinel.
    pub const GENESIS: Self = Self(0);

    /// The first position a committed record may carry.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw position number.
    pub fn new(position: u64) -> Self {
        Self(position)
    }

    /// Return the raw position number.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Whether this is the reserved genesis sentinel.
    pub fn is_genesis(&self) -> bool {
        self.0 == 0
    }

    /// The next position in the total order.
    pub fn next(&self) -> Result<Self, PositionError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(PositionError::Overflow { at: self.0 })
    }
}

impl std::fmt::Display for LedgerPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
