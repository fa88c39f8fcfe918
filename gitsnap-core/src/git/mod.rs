//! Git operations for gitsnap
//!
//! The external git executable is the only version-control collaborator.
//! Everything goes through the [`GitClient`] seam so the discovery walker,
//! branch selector, and restore pipeline can be exercised against a fake.

mod branch;
mod runner;

pub use branch::{select_branch, BranchOutcome};
pub use runner::GitRunner;

use std::path::Path;

use crate::Result;

/// The git operations the snapshot and restore pipelines need
pub trait GitClient {
    /// Read the configured `remote.origin.url` for the repository at `repo_dir`
    fn remote_url(&self, repo_dir: &Path) -> Result<String>;

    /// List remote branch references, one trimmed entry per line
    ///
    /// The listing includes the remote HEAD pointer line
    /// (e.g. `origin/HEAD -> origin/main`) exactly as git prints it.
    fn remote_branches(&self, repo_dir: &Path) -> Result<Vec<String>>;

    /// Create a local branch tracking `branch` and switch to it
    fn checkout(&self, repo_dir: &Path, branch: &str) -> Result<()>;

    /// Clone `url` into `target`
    fn clone_into(&self, url: &str, target: &Path) -> Result<()>;
}
