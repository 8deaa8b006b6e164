//! # Issue / Revoke Subcommands
//!
//! Commits registry transitions against the store. Registry rejections
//! (unauthorized caller, duplicate transition) are domain answers: they
//! print a `REJECTED:` line and exit 1 without touching the store.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use treg_core::{AccountId, CredentialDigest};
use treg_ledger::{CommitRecord, LedgerError, RegistryHost};

/// Arguments for the `treg issue` subcommand.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Account submitting the issuance (must be the registry owner).
    #[arg(long)]
    pub caller: String,

    /// 64-char hex digest of the credential batch.
    #[arg(value_name = "DIGEST")]
    pub digest: String,
}

/// Arguments for the `treg revoke` subcommand.
#[derive(Args, Debug)]
pub struct RevokeArgs {
    /// Account submitting the revocation (any account may revoke).
    #[arg(long)]
    pub caller: String,

    /// 64-char hex digest of the batch or individual credential.
    #[arg(value_name = "DIGEST")]
    pub digest: String,
}

/// Execute the issue subcommand.
pub fn run_issue(args: &IssueArgs, store: &Path) -> Result<u8> {
    let caller = AccountId::new(args.caller.clone())?;
    let digest = CredentialDigest::from_hex(&args.digest)?;

    let mut host = crate::load_store(store)?;
    commit(store, &mut host, "issued", |host| host.issue(&caller, digest))
}

/// Execute the revoke subcommand.
pub fn run_revoke(args: &RevokeArgs, store: &Path) -> Result<u8> {
    let caller = AccountId::new(args.caller.clone())?;
    let digest = CredentialDigest::from_hex(&args.digest)?;

    let mut host = crate::load_store(store)?;
    commit(store, &mut host, "revoked", |host| host.revoke(&caller, digest))
}

/// Apply one transition, persist on success, report rejection on refusal.
fn commit<F>(store: &Path, host: &mut RegistryHost, verb: &str, transition: F) -> Result<u8>
where
    F: FnOnce(&mut RegistryHost) -> Result<CommitRecord, LedgerError>,
{
    match transition(host) {
        Ok(record) => {
            crate::save_store(host, store)?;
            println!(
                "OK: {verb} digest={} position={}",
                record.event.digest(),
                record.position
            );
            Ok(0)
        }
        Err(LedgerError::Registry(err)) => {
            println!("REJECTED: {err}");
            Ok(1)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{run_init, InitArgs};

    fn setup_store(dir: &Path) -> std::path::PathBuf {
        let store = dir.join("registry.json");
        run_init(
            &InitArgs {
                name: "Acme University".to_string(),
                owner: "registrar.acme".to_string(),
                start_position: None,
            },
            &store,
        )
        .unwrap();
        store
    }

    fn hex(label: &str) -> String {
        CredentialDigest::sha256_of(label.as_bytes()).to_hex()
    }

    #[test]
    fn test_issue_then_status_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = setup_store(dir.path());

        let code = run_issue(
            &IssueArgs {
                caller: "registrar.acme".to_string(),
                digest: hex("batch-1"),
            },
            &store,
        )
        .unwrap();
        assert_eq!(code, 0);

        let host = RegistryHost::load(&store).unwrap();
        let digest = CredentialDigest::from_hex(&hex("batch-1")).unwrap();
        assert!(host.registry().is_issued(&digest));
    }

    #[test]
    fn test_issue_by_non_owner_exits_one_and_keeps_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = setup_store(dir.path());

        let code = run_issue(
            &IssueArgs {
                caller: "impostor".to_string(),
                digest: hex("batch-1"),
            },
            &store,
        )
        .unwrap();
        assert_eq!(code, 1);

        let host = RegistryHost::load(&store).unwrap();
        assert!(host.journal().is_empty());
    }

    #[test]
    fn test_duplicate_issue_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = setup_store(dir.path());
        let args = IssueArgs {
            caller: "registrar.acme".to_string(),
            digest: hex("batch-1"),
        };

        assert_eq!(run_issue(&args, &store).unwrap(), 0);
        assert_eq!(run_issue(&args, &store).unwrap(), 1);
    }

    #[test]
    fn test_any_caller_may_revoke() {
        let dir = tempfile::tempdir().unwrap();
        let store = setup_store(dir.path());

        let code = run_revoke(
            &RevokeArgs {
                caller: "concerned.verifier".to_string(),
                digest: hex("known-forgery"),
            },
            &store,
        )
        .unwrap();
        assert_eq!(code, 0);

        let host = RegistryHost::load(&store).unwrap();
        let digest = CredentialDigest::from_hex(&hex("known-forgery")).unwrap();
        assert!(host.registry().is_revoked(&digest));
        assert!(!host.registry().is_issued(&digest));
    }

    #[test]
    fn test_invalid_digest_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = setup_store(dir.path());

        let result = run_issue(
            &IssueArgs {
                caller: "registrar.acme".to_string(),
                digest: "not-hex".to_string(),
            },
            &store,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_store_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_issue(
            &IssueArgs {
                caller: "registrar.acme".to_string(),
                digest: hex("batch-1"),
            },
            &dir.path().join("absent.json"),
        );
        assert!(result.is_err());
    }
}
