//! # treg-ledger — Standalone Ledger Host
//!
//! The registry core assumes a hosting ledger that totally orders
//! committed operations, assigns strictly increasing position numbers,
//! and executes atomically. This crate is that host for non-chain
//! deployments: a monotonic sequence clock standing in for the chain's
//! native ordering primitive, a serialized execution path, and an
//! append-only commit journal that doubles as the event channel.
//!
//! ## Guarantees
//!
//! - Positions number *committed* operations only. A rejected operation
//!   consumes no position and appends nothing to the journal.
//! - Each operation fully commits or fully rejects; there are no partial
//!   writes across registry state, clock, and journal.
//! - Snapshot persistence round-trips the registry, the journal, and the
//!   clock, and refuses snapshots whose clock disagrees with the journal.

pub mod clock;
pub mod host;

pub use clock::SequenceClock;
pub use host::{CommitRecord, LedgerError, RegistryHost};
