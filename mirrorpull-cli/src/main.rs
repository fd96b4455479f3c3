//! mirrorpull — keep numbered content directories mirrored from git remotes.
//!
//! # Usage
//!
//! ```text
//! mirrorpull pull <id> <root> [--upstream <base>] [--branch <name>]
//! mirrorpull scan [--json]
//! ```
//!
//! `pull` converges `<root>/<id>` onto the remote derived from the upstream
//! template and exits non-zero if the update did not succeed. `scan` drains
//! the trigger queue configured through `PUBLIC` / `PRIVATE` /
//! `UPSTREAM_REPO_DIR`, relocating the marker of every successfully synced
//! identifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{pull::PullArgs, scan::ScanArgs};

#[derive(Parser, Debug)]
#[command(
    name = "mirrorpull",
    version,
    about = "Update local directories with the latest files from git repositories",
    long_about = None,
)]
struct Cli {
    /// Enable debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sync one numbered directory from its upstream repository.
    Pull(PullArgs),

    /// Drain the trigger queue and signal the downstream pipeline.
    Scan(ScanArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Pull(args) => args.run(),
        Commands::Scan(args) => args.run(),
    }
}
