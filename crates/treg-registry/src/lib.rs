//! # treg-registry — The Registry State Machine
//!
//! Records the issuance and revocation of credential-batch digests on an
//! append-only ordered ledger, and answers historical queries ("was this
//! digest already issued/revoked as of position P") using only the
//! monotonic position numbers the ledger assigned.
//!
//! ## Model
//!
//! Per digest there are two independent tracks, issuance and revocation,
//! each a two-state machine: `Absent → Recorded(position)`. `Recorded` is
//! terminal — re-triggering is rejected with an error, never treated as a
//! no-op, and the originally recorded position is retained.
//!
//! ## Policy
//!
//! - **Issuance is owner-gated.** Issuing asserts trust, so only the
//!   registry owner may do it.
//! - **Revocation is open.** Any caller may revoke, including digests that
//!   were never issued (a pre-emptive "known bad" marker). Marking
//!   something untrustworthy cannot harm a legitimate holder.
//!
//! ## Hosting Contract
//!
//! The registry executes one operation at a time as serialized by its
//! host. Every operation either fully commits or fully rejects; a
//! rejection leaves both record sets byte-for-byte unchanged.

pub mod event;
pub mod registry;

pub use event::RegistryEvent;
pub use registry::{CredentialRegistry, RegistryError};
