//! Branch selection applied after a clone
//!
//! Exactly two branch names are ever considered, in fixed priority order:
//! `dev`, then `dev_branch`. Anything else leaves the repository on the
//! branch the clone checked out by default.

use std::path::Path;

use super::GitClient;
use crate::Result;

/// What the selector did to a freshly cloned repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// Switched to `dev`
    Dev,
    /// Switched to `dev_branch`
    DevBranch,
    /// Neither candidate exists on the remote; no action taken
    Default,
    /// Branch listing or checkout failed; repository left as cloned
    Failed,
}

impl BranchOutcome {
    /// Stable string form, suitable for user-facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchOutcome::Dev => "dev",
            BranchOutcome::DevBranch => "dev_branch",
            BranchOutcome::Default => "default",
            BranchOutcome::Failed => "error",
        }
    }
}

/// Pick and check out the preferred branch for the repository at `repo_dir`.
///
/// Never fails: any error while listing or checking out degrades to
/// [`BranchOutcome::Failed`] with a warning, and the restore run continues.
pub fn select_branch(git: &dyn GitClient, repo_dir: &Path) -> BranchOutcome {
    match try_select(git, repo_dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(
                "Could not switch branches in {}: {}",
                repo_dir.display(),
                e
            );
            BranchOutcome::Failed
        }
    }
}

fn try_select(git: &dyn GitClient, repo_dir: &Path) -> Result<BranchOutcome> {
    // The listing contains a pointer line such as "origin/HEAD -> origin/main";
    // exact matching keeps it from hitting either candidate.
    let branches = git.remote_branches(repo_dir)?;

    if branches.iter().any(|b| b == "origin/dev") {
        git.checkout(repo_dir, "dev")?;
        return Ok(BranchOutcome::Dev);
    }

    if branches.iter().any(|b| b == "origin/dev_branch") {
        git.checkout(repo_dir, "dev_branch")?;
        return Ok(BranchOutcome::DevBranch);
    }

    Ok(BranchOutcome::Default)
}
