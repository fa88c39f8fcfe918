//! Snapshot persistence for discovered repositories

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default snapshot file name, resolved against the working directory
pub const SNAPSHOT_FILE: &str = "git-repos-snapshot.json";

/// One discovered repository: where it sat relative to the scan base, and
/// which remote it came from. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoRecord {
    /// Path relative to the scan base, `/`-separated on every platform
    pub relative_path: String,
    /// Configured remote URL; treated as opaque
    pub remote_url: String,
}

/// Write `records` to `path` as a pretty-printed JSON array
pub fn save_snapshot(path: &Path, records: &[RepoRecord]) -> Result<()> {
    let contents = serde_json::to_string_pretty(records)?;
    fs::write(path, contents).map_err(Error::Io)
}

/// Read an ordered record list back from `path`
///
/// A missing file maps to [`Error::SnapshotMissing`]; contents that are not
/// a valid record array map to [`Error::Json`].
pub fn load_snapshot(path: &Path) -> Result<Vec<RepoRecord>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::SnapshotMissing(path.to_path_buf()))
        }
        Err(e) => return Err(Error::Io(e)),
    };

    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(rel: &str, url: &str) -> RepoRecord {
        RepoRecord {
            relative_path: rel.to_string(),
            remote_url: url.to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);
        let records = vec![
            record("zulu", "https://example.com/zulu.git"),
            record("alpha/nested", "https://example.com/nested.git"),
            record("mike", ""),
        ];

        save_snapshot(&path, &records).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_document_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);
        save_snapshot(&path, &[record("a/b", "https://example.com/a.git")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // camelCase keys, pretty-printed
        assert!(contents.contains("\"relativePath\": \"a/b\""));
        assert!(contents.contains("\"remoteUrl\": \"https://example.com/a.git\""));
        assert!(contents.starts_with("[\n"));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");

        let result = load_snapshot(&path);
        assert!(matches!(result, Err(Error::SnapshotMissing(p)) if p == path));
    }

    #[test]
    fn test_malformed_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);
        fs::write(&path, "{ not json ]").unwrap();

        assert!(matches!(load_snapshot(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);
        fs::write(&path, r#"[{"relativePath": "x"}]"#).unwrap();

        assert!(matches!(load_snapshot(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILE);

        save_snapshot(&path, &[]).unwrap();
        assert!(load_snapshot(&path).unwrap().is_empty());
    }
}
