//! Path generation and resolution shared by storage backends.
//!
//! Partition directories are `<subdirectory>/<YYYY>/<Month>`. References handed
//! to callers are `/`-separated and relative to the storage root. Incoming
//! references may also carry the root directory's own name in front
//! (`requests/submissions/...`).

use formdrop_core::constants::{REQUEST_LOGS_DIR, SUBMISSIONS_DIR};
use formdrop_core::{Subdirectory, SubmissionStamp};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Partition directory for `stamp` below `root`.
pub fn partition_dir(root: &Path, subdirectory: Subdirectory, stamp: &SubmissionStamp) -> PathBuf {
    root.join(subdirectory.as_str())
        .join(&stamp.year)
        .join(&stamp.month)
}

/// Absolute form of `path` with `.` and `..` folded away, without touching the
/// filesystem. The target does not need to exist.
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// True when `path` is `base` or below it. Compares whole components, so
/// `submissions-evil/x` is not inside `submissions`.
pub fn is_within(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

/// Drop a leading `<root name>/` from `reference`. Left alone when the root is
/// itself named like one of the subdirectories.
pub fn strip_root_name<'a>(root: &Path, reference: &'a str) -> &'a str {
    let Some(name) = root.file_name().and_then(|n| n.to_str()) else {
        return reference;
    };
    if name == SUBMISSIONS_DIR || name == REQUEST_LOGS_DIR {
        return reference;
    }
    reference
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(reference)
}

/// True when `path` is a symlink whose target is a directory. Dangling links
/// count as files.
pub async fn points_to_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// `/`-separated reference for `path` relative to `root`.
pub fn to_reference(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_dir() {
        let stamp = SubmissionStamp {
            identifier: "20241016093000123456".to_string(),
            year: "2024".to_string(),
            month: "October".to_string(),
        };
        let dir = partition_dir(Path::new("requests"), Subdirectory::Submissions, &stamp);
        assert_eq!(dir, Path::new("requests/submissions/2024/October"));

        let dir = partition_dir(Path::new("requests"), Subdirectory::RequestLogs, &stamp);
        assert_eq!(dir, Path::new("requests/request_logs/2024/October"));
    }

    #[test]
    fn test_normalize_folds_parent_components() {
        let normalized = normalize(Path::new("/srv/requests/submissions/../../etc/passwd")).unwrap();
        assert_eq!(normalized, Path::new("/srv/etc/passwd"));

        let normalized = normalize(Path::new("/srv/./requests//submissions/x.json")).unwrap();
        assert_eq!(normalized, Path::new("/srv/requests/submissions/x.json"));
    }

    #[test]
    fn test_normalize_makes_relative_paths_absolute() {
        let normalized = normalize(Path::new("requests/submissions")).unwrap();
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("requests/submissions"));
    }

    #[test]
    fn test_is_within_respects_segment_boundaries() {
        let base = Path::new("/srv/requests/submissions");
        assert!(is_within(Path::new("/srv/requests/submissions/2024/x.json"), base));
        assert!(!is_within(Path::new("/srv/requests/submissions-evil/x.json"), base));
        assert!(!is_within(Path::new("/etc/passwd"), base));
    }

    #[test]
    fn test_strip_root_name() {
        let root = Path::new("/srv/requests");
        assert_eq!(
            strip_root_name(root, "requests/submissions/2024/October/a.json"),
            "submissions/2024/October/a.json"
        );
        assert_eq!(
            strip_root_name(root, "submissions/2024/October/a.json"),
            "submissions/2024/October/a.json"
        );
        assert_eq!(strip_root_name(root, "requests-old/x"), "requests-old/x");
        assert_eq!(strip_root_name(root, "requests"), "requests");

        let root = Path::new("/srv/submissions");
        assert_eq!(strip_root_name(root, "submissions/x.json"), "submissions/x.json");
    }

    #[test]
    fn test_to_reference() {
        let root = Path::new("/srv/requests");
        assert_eq!(
            to_reference(root, Path::new("/srv/requests/submissions/2024/October/a.json")),
            Some("submissions/2024/October/a.json".to_string())
        );
        assert_eq!(to_reference(root, Path::new("/srv/requests")), None);
        assert_eq!(to_reference(root, Path::new("/elsewhere/a.json")), None);
    }
}
