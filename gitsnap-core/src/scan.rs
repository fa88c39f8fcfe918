//! Recursive discovery of git repositories under a base directory

use std::fs;
use std::path::Path;

use crate::git::GitClient;
use crate::snapshot::RepoRecord;
use crate::{Error, Result};

/// Subdirectory name marking the root of a git working tree
pub const REPO_MARKER: &str = ".git";

/// Directory names never descended into during discovery
pub const IGNORED_DIRS: &[&str] = &["node_modules"];

/// Walk `base` depth-first and record every git repository found.
///
/// A directory containing [`REPO_MARKER`] is terminal: its remote URL is
/// read and a record emitted, or a warning logged if the read fails, and the
/// walk never descends into it either way. Directories whose contents cannot
/// be listed are skipped silently. Symlinked directories are not followed
/// (entry types are inspected without dereferencing), so symlink cycles
/// cannot occur.
///
/// `on_found` is invoked for each record as it is discovered, in discovery
/// order.
pub fn scan_repos(
    git: &dyn GitClient,
    base: &Path,
    mut on_found: impl FnMut(&RepoRecord),
) -> Result<Vec<RepoRecord>> {
    if !base.is_dir() {
        return Err(Error::Config(format!(
            "Directory does not exist: {}",
            base.display()
        )));
    }

    let mut records = Vec::new();
    scan_dir(git, base, base, &mut records, &mut on_found);
    Ok(records)
}

fn scan_dir(
    git: &dyn GitClient,
    dir: &Path,
    base: &Path,
    records: &mut Vec<RepoRecord>,
    on_found: &mut impl FnMut(&RepoRecord),
) {
    if dir.join(REPO_MARKER).exists() {
        match git.remote_url(dir) {
            Ok(remote_url) => {
                let record = RepoRecord {
                    relative_path: relative_to(base, dir),
                    remote_url,
                };
                on_found(&record);
                records.push(record);
            }
            Err(e) => {
                tracing::warn!(
                    "Found {} at {} but failed to read remote URL: {}",
                    REPO_MARKER,
                    dir.display(),
                    e
                );
            }
        }
        // Never look inside a repository for more repositories
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Locked or vanished directory
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(_) => continue,
        };

        // file_type() does not dereference, so symlinked directories land in
        // the is_dir() == false bucket and are skipped
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        if name == REPO_MARKER || IGNORED_DIRS.iter().any(|d| name == *d) {
            continue;
        }

        scan_dir(git, &entry.path(), base, records, on_found);
    }
}

/// Relative path from `base` to `dir`, `/`-separated on every platform
fn relative_to(base: &Path, dir: &Path) -> String {
    let rel = dir.strip_prefix(base).unwrap_or(dir);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fake::FakeGit;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a repository directory (with marker) and register its remote
    fn add_repo(git: &mut FakeGit, base: &Path, rel: &str, url: &str) -> PathBuf {
        let dir = base.join(rel);
        fs::create_dir_all(dir.join(REPO_MARKER)).unwrap();
        git.remote_urls.insert(dir.clone(), url.to_string());
        dir
    }

    #[test]
    fn test_finds_repos_with_relative_paths() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();
        add_repo(&mut git, temp.path(), "alpha", "https://example.com/alpha.git");
        add_repo(
            &mut git,
            temp.path(),
            "team/beta",
            "https://example.com/beta.git",
        );

        let records = scan_repos(&git, temp.path(), |_| {}).unwrap();

        let found: HashSet<(String, String)> = records
            .into_iter()
            .map(|r| (r.relative_path, r.remote_url))
            .collect();
        let expected: HashSet<(String, String)> = [
            ("alpha".to_string(), "https://example.com/alpha.git".to_string()),
            (
                "team/beta".to_string(),
                "https://example.com/beta.git".to_string(),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_never_descends_into_a_repo() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();
        let outer = add_repo(&mut git, temp.path(), "outer", "https://example.com/outer.git");

        // A repository nested inside another's working tree must stay invisible
        fs::create_dir_all(outer.join("vendor/inner").join(REPO_MARKER)).unwrap();
        git.remote_urls.insert(
            outer.join("vendor/inner"),
            "https://example.com/inner.git".to_string(),
        );

        let records = scan_repos(&git, temp.path(), |_| {}).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relative_path, "outer");
    }

    #[test]
    fn test_skips_dependency_cache_dirs() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();
        add_repo(
            &mut git,
            temp.path(),
            "node_modules/some-dep",
            "https://example.com/dep.git",
        );

        let records = scan_repos(&git, temp.path(), |_| {}).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_remote_read_failure_skips_and_stays_terminal() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();

        // Marker present but no remote registered: the read fails, and the
        // directory is still terminal, hiding the repo nested below it
        let broken = temp.path().join("broken");
        fs::create_dir_all(broken.join(REPO_MARKER)).unwrap();
        add_repo(&mut git, temp.path(), "broken/sub", "https://example.com/sub.git");
        add_repo(&mut git, temp.path(), "ok", "https://example.com/ok.git");

        let records = scan_repos(&git, temp.path(), |_| {}).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relative_path, "ok");
    }

    #[test]
    fn test_missing_base_fails_fast() {
        let git = FakeGit::default();
        let result = scan_repos(&git, Path::new("/nonexistent/gitsnap-test"), |_| {});
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_base_itself_a_repo() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();
        fs::create_dir_all(temp.path().join(REPO_MARKER)).unwrap();
        git.remote_urls.insert(
            temp.path().to_path_buf(),
            "https://example.com/base.git".to_string(),
        );

        let records = scan_repos(&git, temp.path(), |_| {}).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].relative_path, "");
        assert_eq!(records[0].remote_url, "https://example.com/base.git");
    }

    #[test]
    fn test_on_found_sees_discovery_order() {
        let temp = TempDir::new().unwrap();
        let mut git = FakeGit::default();
        add_repo(&mut git, temp.path(), "one", "https://example.com/one.git");
        add_repo(&mut git, temp.path(), "two", "https://example.com/two.git");

        let mut seen = Vec::new();
        let records = scan_repos(&git, temp.path(), |record| {
            seen.push(record.relative_path.clone());
        })
        .unwrap();

        let recorded: Vec<String> = records.into_iter().map(|r| r.relative_path).collect();
        assert_eq!(seen, recorded);
    }
}
