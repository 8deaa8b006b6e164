//! # Error Types for Foundational Primitives
//!
//! Structured errors for digest parsing, identity validation, position
//! arithmetic, and timestamp parsing. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Every error here is deterministic: the same input against the same
//! state always reproduces the same error.

use thiserror::Error;

/// Error parsing or constructing a credential digest.
#[derive(Error, Debug)]
pub enum DigestError {
    /// The hex string does not have the expected 64-character length.
    #[error("digest hex must be 64 chars, got {got}")]
    InvalidLength {
        /// Length of the rejected input.
        got: usize,
    },

    /// The input contains a non-hexadecimal character.
    #[error("invalid hex at position {position}")]
    InvalidHex {
        /// Byte offset of the offending pair.
        position: usize,
    },
}

/// Error validating an account identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Account identifiers must contain at least one non-whitespace character.
    #[error("account id must not be empty")]
    Empty,
}

/// Error in ledger position arithmetic.
#[derive(Error, Debug)]
pub enum PositionError {
    /// The position counter would exceed `u64::MAX`.
    #[error("ledger position overflow past {at}")]
    Overflow {
        /// The position that could not be advanced.
        at: u64,
    },
}

/// Error parsing a timestamp.
#[derive(Error, Debug)]
pub enum TemporalError {
    /// Only UTC timestamps with the `Z` suffix are accepted.
    #[error("timestamp must use Z suffix (UTC only), got: {0:?}")]
    NonUtc(String),

    /// The string is not valid RFC 3339.
    #[error("invalid RFC 3339 timestamp {input:?}: {source}")]
    Invalid {
        /// The rejected input.
        input: String,
        /// The underlying chrono parse failure.
        source: chrono::ParseError,
    },
}
