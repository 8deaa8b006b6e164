//! # Init Subcommand
//!
//! Creates a new registry store: constructs the registry with its label
//! and owner, wraps it in a host, and writes the first snapshot.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;

use treg_core::{AccountId, LedgerPosition};
use treg_ledger::RegistryHost;

/// Arguments for the `treg init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Human-readable registry label (the institution name).
    #[arg(long)]
    pub name: String,

    /// Account permitted to issue. Fixed for the life of the registry.
    #[arg(long)]
    pub owner: String,

    /// Position the first commit will carry (defaults to 1).
    #[arg(long)]
    pub start_position: Option<u64>,
}

/// Execute the init subcommand.
pub fn run_init(args: &InitArgs, store: &Path) -> Result<u8> {
    if store.exists() {
        bail!("store already exists: {}", store.display());
    }

    let owner = AccountId::new(args.owner.clone())?;
    let host = match args.start_position {
        Some(position) => {
            RegistryHost::open_at(&args.name, owner, LedgerPosition::new(position))?
        }
        None => RegistryHost::open(&args.name, owner)?,
    };

    crate::save_store(&host, store)?;
    println!(
        "OK: initialized registry name={} owner={} store={}",
        host.registry().name(),
        host.registry().owner(),
        store.display()
    );
    Ok(0)
}
