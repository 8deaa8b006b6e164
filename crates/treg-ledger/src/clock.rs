//! # Sequence Clock
//!
//! A monotonic logical clock that substitutes the hosting ledger's native
//! ordering primitive. Positions are assigned atomically with commit,
//! strictly increase, and are never reused — the clock only moves when an
//! operation actually commits.

use serde::{Deserialize, Serialize};

use treg_core::{LedgerPosition, PositionError};

/// Monotonic position source for a [`crate::RegistryHost`].
///
/// `peek()` exposes the position the next commit will carry; `advance()`
/// consumes it. The genesis sentinel (0) is never handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceClock {
    next: LedgerPosition,
}

impl SequenceClock {
    /// A clock whose first assigned position is 1.
    pub fn new() -> Self {
        Self {
            next: LedgerPosition::FIRST,
        }
    }

    /// A clock whose first assigned position is `first`.
    ///
    /// Returns `None` for the genesis sentinel — no committed record may
    /// carry position 0.
    pub fn starting_at(first: LedgerPosition) -> Option<Self> {
        if first.is_genesis() {
            return None;
        }
        Some(Self { next: first })
    }

    /// The position the next commit will be assigned.
    pub fn peek(&self) -> LedgerPosition {
        self.next
    }

    /// Assign the next position and move the clock past it.
    ///
    /// On overflow the clock is left unchanged and no position is
    /// consumed.
    pub fn advance(&mut self) -> Result<LedgerPosition, PositionError> {
        let assigned = self.next;
        self.next = assigned.next()?;
        Ok(assigned)
    }
}

impl Default for SequenceClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_one() {
        let clock = SequenceClock::new();
        assert_eq!(clock.peek(), LedgerPosition::FIRST);
    }

    #[test]
    fn test_advance_is_strictly_increasing() {
        let mut clock = SequenceClock::new();
        let a = clock.advance().unwrap();
        let b = clock.advance().unwrap();
        let c = clock.advance().unwrap();
        assert_eq!(a, LedgerPosition::new(1));
        assert_eq!(b, LedgerPosition::new(2));
        assert_eq!(c, LedgerPosition::new(3));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut clock = SequenceClock::new();
        assert_eq!(clock.peek(), clock.peek());
        assert_eq!(clock.advance().unwrap(), LedgerPosition::new(1));
    }

    #[test]
    fn test_starting_at_rejects_genesis() {
        assert!(SequenceClock::starting_at(LedgerPosition::GENESIS).is_none());
        let clock = SequenceClock::starting_at(LedgerPosition::new(100)).unwrap();
        assert_eq!(clock.peek(), LedgerPosition::new(100));
    }

    #[test]
    fn test_advance_overflow_leaves_clock_unchanged() {
        let mut clock = SequenceClock::starting_at(LedgerPosition::new(u64::MAX)).unwrap();
        // The clock refuses to assign a position it cannot move past.
        assert!(clock.advance().is_err());
        assert_eq!(clock.peek(), LedgerPosition::new(u64::MAX));
    }
}
