//! gitsnap CLI - snapshot a tree of git repositories and restore it elsewhere
//!
//! Running without a subcommand opens the interactive menu; `import` and
//! `restore` are also available directly for scripted use.

mod commands;
mod prompt;

use clap::{Parser, Subcommand};
use gitsnap_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ImportArgs, RestoreArgs};

/// gitsnap: inventory git repositories into a snapshot and replay it
#[derive(Parser, Debug)]
#[command(name = "gitsnap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the git executable (overrides config and env)
    #[arg(long, global = true, env = "GITSNAP_GIT_PATH")]
    git_path: Option<String>,

    /// Snapshot file name (overrides config and env)
    #[arg(long, global = true, env = "GITSNAP_SNAPSHOT_FILE")]
    snapshot_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Scan a source directory and save the snapshot
    #[command(visible_alias = "i")]
    Import(ImportArgs),

    /// Clone every snapshot entry under a target directory
    #[command(visible_alias = "r")]
    Restore(RestoreArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default to warn so the per-repository audit warnings are visible
    // without RUST_LOG set
    let default_directive = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    let config = Config::load_with_overrides(cli.git_path.clone(), cli.snapshot_file.clone())?;

    if cli.verbose {
        tracing::info!(
            git_path = %config.git.path,
            snapshot_file = %config.snapshot.file,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("gitsnap {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Import(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Restore(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("gitsnap Configuration");
            println!("=====================");
            println!();
            println!("Git Settings:");
            println!("  path: {}", config.git.path);
            println!();
            println!("Snapshot Settings:");
            println!("  file: {}", config.snapshot.file);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            commands::menu(&config).await?;
        }
    }

    Ok(())
}
