//! Restore command: replay the snapshot under a target directory

use std::fs;
use std::path::PathBuf;

use clap::Args;
use gitsnap_core::{
    load_snapshot, restore_all, BranchOutcome, Config, GitRunner, RestoreEvent,
};

use crate::prompt::Prompter;

/// Clone every repository in the snapshot under a target directory
#[derive(Args, Debug, Default)]
pub struct RestoreArgs {
    /// Absolute path of the target directory (prompted for if omitted)
    pub target: Option<PathBuf>,

    /// Attempt the dev/dev_branch checkout strategy without prompting
    #[arg(long, conflicts_with = "no_switch")]
    pub switch: bool,

    /// Stay on each clone's default branch without prompting
    #[arg(long)]
    pub no_switch: bool,
}

impl RestoreArgs {
    /// Execute the restore command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        println!();
        println!("--- RESTORE MODE ---");

        let snapshot_path = PathBuf::from(&config.snapshot.file);
        if !snapshot_path.exists() {
            anyhow::bail!("'{}' not found.", snapshot_path.display());
        }

        let mut prompter = Prompter::stdio();

        let target_base = match &self.target {
            Some(path) => path.clone(),
            None => {
                PathBuf::from(prompter.ask_path("Enter absolute path of Target Directory: ")?)
            }
        };

        if !target_base.exists() {
            fs::create_dir_all(&target_base)?;
        }

        let attempt_switch = if self.switch {
            true
        } else if self.no_switch {
            false
        } else {
            println!();
            println!("--- BRANCH STRATEGY ---");
            println!("We can attempt to auto-checkout branches in this priority:");
            println!("   1. \"dev\"");
            println!("   2. \"dev_branch\"");
            println!("   3. Stay on default (main/master)");
            println!();
            prompter.confirm("Do you want to attempt this checkout strategy? (y/n): ")?
        };

        let records = load_snapshot(&snapshot_path)?;

        if verbose {
            println!("Target: {}", target_base.display());
        }

        println!();
        println!("Starting restore for {} repositories...", records.len());
        println!();

        let git = GitRunner::new(config.git.path.clone());

        let summary = restore_all(&git, &target_base, &records, attempt_switch, |event| {
            match event {
                RestoreEvent::Skipped { record } => {
                    println!("[SKIP] Exists: {}", record.relative_path);
                }
                RestoreEvent::Cloning { record, target } => {
                    println!("[CLONE] {} -> {}", record.remote_url, target.display());
                }
                RestoreEvent::Cloned { branch, .. } => match branch {
                    Some(BranchOutcome::Default) => {
                        println!("   -> Remained on default branch (dev/dev_branch not found).");
                    }
                    // Failed already logged its warning; no switch requested
                    // means nothing to report
                    Some(BranchOutcome::Failed) | None => {}
                    Some(outcome) => {
                        println!("   -> Switched to branch: '{}'", outcome.as_str());
                    }
                },
                RestoreEvent::Failed { record, error } => {
                    println!("[ERROR] Failed to restore {}: {}", record.remote_url, error);
                }
            }
        });

        println!();
        println!("All processing complete.");
        println!(
            "  cloned: {}  skipped: {}  failed: {}",
            summary.cloned, summary.skipped, summary.failed
        );

        Ok(())
    }
}
