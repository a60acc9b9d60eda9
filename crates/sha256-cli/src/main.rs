//! # sha256 CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// From-scratch SHA-256.
///
/// Hashes files, stdin, or ASCII text, and cross-checks the implementation
/// against the `sha2` crate.
#[derive(Parser, Debug)]
#[command(name = "sha256", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print SHA-256 digests in sha256sum format.
    Hash(sha256_cli::hash::HashArgs),
    /// Randomized differential test against a trusted implementation.
    SelfTest(sha256_cli::selftest::SelfTestArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout carries digests only.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash(args) => sha256_cli::hash::run(&args),
        Commands::SelfTest(args) => sha256_cli::selftest::run(&args),
    }
}
