//! Import command: scan a directory tree and save the snapshot

use std::path::PathBuf;

use clap::Args;
use gitsnap_core::{save_snapshot, scan_repos, Config, GitRunner};

use crate::prompt::Prompter;

/// Scan a source directory for git repositories and save the snapshot
#[derive(Args, Debug, Default)]
pub struct ImportArgs {
    /// Absolute path of the source directory (prompted for if omitted)
    pub source: Option<PathBuf>,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        println!();
        println!("--- IMPORT MODE ---");

        let source = match &self.source {
            Some(path) => path.clone(),
            None => {
                let mut prompter = Prompter::stdio();
                PathBuf::from(prompter.ask_path("Enter absolute path of Source Directory: ")?)
            }
        };

        if !source.is_dir() {
            anyhow::bail!("Directory does not exist: {}", source.display());
        }

        if verbose {
            println!("Source: {}", source.display());
        }

        let git = GitRunner::new(config.git.path.clone());

        println!("Scanning...");
        let records = scan_repos(&git, &source, |record| {
            println!("[FOUND] {}", record.relative_path);
        })?;

        if records.is_empty() {
            println!("No repositories found.");
            return Ok(());
        }

        let snapshot_path = PathBuf::from(&config.snapshot.file);
        save_snapshot(&snapshot_path, &records)?;

        println!();
        println!(
            "Success! Saved {} repos to {}",
            records.len(),
            snapshot_path.display()
        );

        Ok(())
    }
}
