//! Sequential replay of a snapshot against a target directory

use std::fs;
use std::path::Path;

use crate::git::{select_branch, BranchOutcome, GitClient};
use crate::scan::REPO_MARKER;
use crate::snapshot::RepoRecord;
use crate::{Error, Result};

/// Aggregate counts for one restore run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Repositories cloned this run
    pub cloned: usize,
    /// Targets that already contained a repository
    pub skipped: usize,
    /// Records whose clone or target preparation failed
    pub failed: usize,
}

/// Progress notifications emitted while a restore runs
#[derive(Debug)]
pub enum RestoreEvent<'a> {
    /// Target already contains a repository; nothing to do
    Skipped {
        /// The record being replayed
        record: &'a RepoRecord,
    },
    /// Clone is about to start
    Cloning {
        /// The record being replayed
        record: &'a RepoRecord,
        /// Resolved clone destination
        target: &'a Path,
    },
    /// Clone finished; `branch` is present when switching was requested
    Cloned {
        /// The record being replayed
        record: &'a RepoRecord,
        /// Outcome of the branch-selection strategy, if it ran
        branch: Option<BranchOutcome>,
    },
    /// Clone or target preparation failed; the run continues
    Failed {
        /// The record being replayed
        record: &'a RepoRecord,
        /// What went wrong
        error: Error,
    },
}

/// Replay `records` under `target_base`, one repository at a time.
///
/// A target already containing [`REPO_MARKER`] is skipped, so re-running
/// after an interrupted restore is safe. One record's failure never aborts
/// the batch. `report` receives every event in processing order.
pub fn restore_all(
    git: &dyn GitClient,
    target_base: &Path,
    records: &[RepoRecord],
    attempt_switch: bool,
    mut report: impl FnMut(RestoreEvent<'_>),
) -> RestoreSummary {
    let mut summary = RestoreSummary::default();

    for record in records {
        let target = target_base.join(&record.relative_path);

        if target.join(REPO_MARKER).exists() {
            report(RestoreEvent::Skipped { record });
            summary.skipped += 1;
            continue;
        }

        if let Err(error) = prepare_target(&target) {
            report(RestoreEvent::Failed { record, error });
            summary.failed += 1;
            continue;
        }

        report(RestoreEvent::Cloning {
            record,
            target: &target,
        });

        match git.clone_into(&record.remote_url, &target) {
            Ok(()) => {
                let branch = attempt_switch.then(|| select_branch(git, &target));
                report(RestoreEvent::Cloned { record, branch });
                summary.cloned += 1;
            }
            Err(error) => {
                report(RestoreEvent::Failed { record, error });
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Make the clone target creatable: parents exist, and a leftover empty
/// directory from an interrupted run is removed (clone refuses to populate
/// an existing directory).
fn prepare_target(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if target.is_dir() && fs::read_dir(target)?.next().is_none() {
        fs::remove_dir(target)?;
    }

    Ok(())
}
