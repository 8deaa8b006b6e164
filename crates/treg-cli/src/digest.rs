//! # Digest Subcommand
//!
//! Computes the SHA-256 credential digest of a file, for callers who
//! register individual credential documents rather than batch Merkle
//! roots.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use treg_core::CredentialDigest;

/// Arguments for the `treg digest` subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Path to the credential file to digest.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Execute the digest subcommand.
pub fn run_digest(args: &DigestArgs) -> Result<u8> {
    if !args.file.exists() {
        bail!("file not found: {}", args.file.display());
    }
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("failed to read file: {}", args.file.display()))?;
    let digest = CredentialDigest::sha256_of(&bytes);
    println!("{digest}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("credential.json");
        std::fs::write(&file, b"{\"degree\": \"BSc\"}").unwrap();

        let code = run_digest(&DigestArgs { file }).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_digest_missing_file() {
        let err = run_digest(&DigestArgs {
            file: PathBuf::from("/tmp/treg-no-such-credential.json"),
        })
        .unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_digest_matches_library_helper() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("credential.bin");
        std::fs::write(&file, b"credential-bytes").unwrap();

        let expected = CredentialDigest::sha256_of(b"credential-bytes");
        let actual = CredentialDigest::sha256_of(&std::fs::read(&file).unwrap());
        assert_eq!(actual, expected);
    }
}
