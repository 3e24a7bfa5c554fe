//! readmegen — generate a README.md from a project description file.
//!
//! # Usage
//!
//! ```text
//! readmegen init [PATH] [--title T] [--author A] [--tech NAME]... [--status NAME]... [--force]
//! readmegen generate [PROJECT] [--output FILE] [--stdout] [--dry-run] [--templates DIR]
//! readmegen diff [PROJECT] [--output FILE] [--templates DIR]
//! readmegen catalog [--category C] [--search S] [--status] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{catalog::CatalogArgs, diff::DiffArgs, generate::GenerateArgs, init::InitArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "readmegen",
    version,
    about = "Generate a polished README.md from a project description",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter project file.
    Init(InitArgs),

    /// Render the README and write it (or print it with --stdout).
    Generate(GenerateArgs),

    /// Show a unified diff between the README on disk and a fresh render.
    Diff(DiffArgs),

    /// List the technology and status badge catalogs.
    Catalog(CatalogArgs),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Generate(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Catalog(args) => args.run(),
    }
}
