//! gitsnap core - snapshot and restore of git repository trees
//!
//! This crate provides the discovery walk that inventories a directory tree
//! for git repositories, the JSON snapshot store, and the sequential restore
//! pipeline that clones each recorded repository and optionally switches to
//! a preferred branch.

pub mod config;
pub mod error;
pub mod git;
pub mod restore;
pub mod scan;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use git::{BranchOutcome, GitClient, GitRunner};
pub use restore::{restore_all, RestoreEvent, RestoreSummary};
pub use scan::scan_repos;
pub use snapshot::{load_snapshot, save_snapshot, RepoRecord, SNAPSHOT_FILE};
