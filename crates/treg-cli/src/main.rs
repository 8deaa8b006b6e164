//! # treg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use treg_cli::digest::{run_digest, DigestArgs};
use treg_cli::init::{run_init, InitArgs};
use treg_cli::query::{run_journal, run_status, run_verify, JournalArgs, StatusArgs, VerifyArgs};
use treg_cli::record::{run_issue, run_revoke, IssueArgs, RevokeArgs};

/// Trust Registry Stack CLI.
///
/// Records credential-batch issuance and revocation on an append-only,
/// position-numbered journal, and answers retroactive verification
/// queries against it.
#[derive(Parser, Debug)]
#[command(name = "treg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the registry store file.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new registry store.
    Init(InitArgs),

    /// Issue a credential-batch digest (owner only).
    Issue(IssueArgs),

    /// Revoke a digest, issued or not (any caller).
    Revoke(RevokeArgs),

    /// Show issuance/revocation status for a digest.
    Status(StatusArgs),

    /// Answer historical queries at a reference position.
    Verify(VerifyArgs),

    /// Compute the SHA-256 digest of a credential file.
    Digest(DigestArgs),

    /// Print the commit journal.
    Journal(JournalArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let store = treg_cli::store_path(cli.store.as_deref());
    tracing::debug!(store = %store.display(), "resolved registry store");

    let result = match cli.command {
        Commands::Init(args) => run_init(&args, &store),
        Commands::Issue(args) => run_issue(&args, &store),
        Commands::Revoke(args) => run_revoke(&args, &store),
        Commands::Status(args) => run_status(&args, &store),
        Commands::Verify(args) => run_verify(&args, &store),
        Commands::Digest(args) => run_digest(&args),
        Commands::Journal(args) => run_journal(&args, &store),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
