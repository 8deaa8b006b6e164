//! # Status / Verify / Journal Subcommands
//!
//! Read-only queries against the store, printed as JSON so downstream
//! tooling can consume them directly.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde_json::json;

use treg_core::{CredentialDigest, LedgerPosition};

/// Arguments for the `treg status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// 64-char hex digest to look up.
    #[arg(value_name = "DIGEST")]
    pub digest: String,
}

/// Arguments for the `treg verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// 64-char hex digest to verify.
    #[arg(value_name = "DIGEST")]
    pub digest: String,

    /// Reference ledger position ("as of position P"). 0 means "before
    /// recorded history" and always answers false.
    #[arg(long = "at", value_name = "POSITION")]
    pub reference: u64,
}

/// Arguments for the `treg journal` subcommand.
#[derive(Args, Debug)]
pub struct JournalArgs {}

/// Execute the status subcommand.
pub fn run_status(args: &StatusArgs, store: &Path) -> Result<u8> {
    let digest = CredentialDigest::from_hex(&args.digest)?;
    let host = crate::load_store(store)?;
    let registry = host.registry();

    let output = json!({
        "registry": registry.name(),
        "digest": digest.to_hex(),
        "issued": registry.is_issued(&digest),
        "issued_position": registry.issued_position(&digest).ok().map(|p| p.get()),
        "revoked": registry.is_revoked(&digest),
        "revoked_position": registry.revoked_position(&digest).ok().map(|p| p.get()),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(0)
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, store: &Path) -> Result<u8> {
    let digest = CredentialDigest::from_hex(&args.digest)?;
    let reference = LedgerPosition::new(args.reference);
    let host = crate::load_store(store)?;
    let registry = host.registry();

    let issued = registry.is_issued_before(&digest, reference);
    let revoked = registry.is_revoked_before(&digest, reference);
    let output = json!({
        "registry": registry.name(),
        "digest": digest.to_hex(),
        "reference_position": reference.get(),
        "issued_before": issued,
        "revoked_before": revoked,
        "valid_at_reference": issued && !revoked,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(0)
}

/// Execute the journal subcommand.
pub fn run_journal(_args: &JournalArgs, store: &Path) -> Result<u8> {
    let host = crate::load_store(store)?;
    println!("{}", serde_json::to_string_pretty(host.journal())?);
    Ok(0)
}
