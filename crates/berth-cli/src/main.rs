//! `berth` -- CLI binary for inspecting connection configuration.
//!
//! Provides the following subcommands:
//!
//! - `berth status` -- Show every registered connection and its state.
//! - `berth list` -- List available connection names, one per line.
//! - `berth view` -- Print a connection's public view as JSON.
//!
//! The binary loads `.env` (if present), builds the default registry,
//! and initializes it against the process environment. Misconfigured
//! connections are reported, never fatal.

use clap::{Parser, Subcommand};

use berth_connections::default_registry;
use berth_platform::NativeEnvironment;

mod commands;

/// berth connection inspection CLI.
#[derive(Parser)]
#[command(name = "berth", about = "berth connection inspection CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show every registered connection and its state.
    Status,

    /// List available connection names, one per line.
    List,

    /// Print a connection's public view as JSON.
    View {
        /// Connection name (e.g. "solana").
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    // Settings may come from a local .env; absence is not an error.
    dotenvy::dotenv().ok();

    let mut registry = default_registry();
    registry.initialize_all(&NativeEnvironment);

    match cli.command {
        Commands::Status => commands::status::run(&registry),
        Commands::List => commands::list::run(&registry),
        Commands::View { name } => commands::view::run(&registry, &name)?,
    }

    Ok(())
}
