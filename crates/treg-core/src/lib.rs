//! # treg-core — Foundational Types for the Trust Registry Stack
//!
//! Defines the type-system primitives shared by every other crate in the
//! workspace: credential digests, account identities, ledger positions,
//! and UTC-only timestamps. This crate is the leaf of the dependency DAG;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CredentialDigest`,
//!    `AccountId`, `LedgerPosition` — no bare byte arrays, strings, or
//!    integers cross a public API boundary.
//!
//! 2. **The genesis sentinel is reserved.** `LedgerPosition::GENESIS` (0)
//!    means "before recorded history" and can never be carried by a
//!    committed record. Position numbering for real records starts at 1.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with Z suffix and
//!    seconds precision, so journal entries serialize deterministically.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `treg-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod digest;
pub mod error;
pub mod identity;
pub mod position;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use digest::CredentialDigest;
pub use error::{DigestError, IdentityError, PositionError, TemporalError};
pub use identity::AccountId;
pub use position::LedgerPosition;
pub use temporal::Timestamp;
