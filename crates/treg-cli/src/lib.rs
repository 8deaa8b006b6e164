//! # treg-cli — CLI Tool for the Trust Registry Stack
//!
//! Provides the `treg` command-line interface over a file-backed registry
//! store (a JSON snapshot of a [`treg_ledger::RegistryHost`]).
//!
//! ## Subcommands
//!
//! - `treg init` — Create a new registry store.
//! - `treg issue` / `treg revoke` — Commit registry transitions.
//! - `treg status` — Issued/revoked flags and positions for a digest.
//! - `treg verify` — Historical queries at a reference position.
//! - `treg digest` — SHA-256 digest of a credential file.
//! - `treg journal` — Print the commit journal.
//!
//! ## Exit Codes
//!
//! - `0` — success.
//! - `1` — the registry rejected the operation (duplicate transition,
//!   unauthorized caller). Rejections are domain answers, not errors:
//!   the store is left untouched and the reason is printed.
//! - `2` — a hard error (missing store, malformed digest, IO failure).

pub mod digest;
pub mod init;
pub mod query;
pub mod record;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use treg_ledger::RegistryHost;

/// Default store file name, used when `--store` is not given.
pub const DEFAULT_STORE: &str = "treg-registry.json";

/// Resolve the store path from the global `--store` flag.
pub fn store_path(store: Option<&Path>) -> PathBuf {
    store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE))
}

/// Load the registry store, with a readable error if it is missing.
pub fn load_store(path: &Path) -> Result<RegistryHost> {
    RegistryHost::load(path)
        .with_context(|| format!("failed to load registry store: {}", path.display()))
}

/// Persist the registry store.
pub fn save_store(host: &RegistryHost, path: &Path) -> Result<()> {
    host.save(path)
        .with_context(|| format!("failed to write registry store: {}", path.display()))
}
