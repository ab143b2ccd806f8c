use crate::keys;
use crate::traits::{Storage, StorageError, StorageResult, StoredSubmission};
use async_trait::async_trait;
use formdrop_core::constants::ARCHIVE_FILE_NAME;
use formdrop_core::{Subdirectory, SubmissionContent, SubmissionEntry, SubmissionStamp};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `root` - Storage root (e.g., "requests"); created if missing and kept
    ///   in absolute form so later working-directory changes do not move it.
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                root.display(),
                e
            ))
        })?;

        let root = keys::normalize(&root).map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to resolve storage directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalStorage { root })
    }

    /// Absolute path of a subdirectory such as `submissions`.
    pub fn subdirectory_path(&self, subdirectory: Subdirectory) -> PathBuf {
        self.root.join(subdirectory.as_str())
    }

    /// Save with an explicit stamp instead of the current time.
    pub async fn save_with_stamp(
        &self,
        content: &[u8],
        subdirectory: Subdirectory,
        stamp: SubmissionStamp,
    ) -> StorageResult<StoredSubmission> {
        let dir = keys::partition_dir(&self.root, subdirectory, &stamp);
        let path = dir.join(stamp.file_name());
        let start = std::time::Instant::now();

        fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let reference = keys::to_reference(&self.root, &path)
            .ok_or_else(|| StorageError::InvalidPath(path.display().to_string()))?;

        tracing::info!(
            path = %path.display(),
            subdirectory = %subdirectory,
            size_bytes = content.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage save successful"
        );

        Ok(StoredSubmission {
            identifier: stamp.identifier,
            path: reference,
        })
    }

    /// Join `path` onto the root and normalise it, without any containment check.
    /// A leading `<root name>/` segment is accepted and dropped.
    fn key_to_path(&self, path: &str) -> StorageResult<PathBuf> {
        if path.trim().is_empty() {
            return Err(StorageError::InvalidPath("Path is empty".to_string()));
        }
        let relative = keys::strip_root_name(&self.root, path);
        keys::normalize(&self.root.join(relative))
            .map_err(|e| StorageError::InvalidPath(format!("{}: {}", path, e)))
    }

    fn outside(path: &str, base: &Path) -> StorageError {
        StorageError::OutsideRoot {
            path: path.to_string(),
            base: base.display().to_string(),
        }
    }

    /// Canonical check that catches symlinks escaping `base`. Only applies
    /// when the target exists.
    async fn ensure_canonical_within(
        &self,
        path: &str,
        target: &Path,
        base: &Path,
    ) -> StorageResult<()> {
        let (Ok(canonical_target), Ok(canonical_base)) =
            (fs::canonicalize(target).await, fs::canonicalize(base).await)
        else {
            return Ok(());
        };
        if keys::is_within(&canonical_target, &canonical_base) {
            Ok(())
        } else {
            Err(Self::outside(path, base))
        }
    }

    async fn walk_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let mut entries = fs::read_dir(&current).await?;
            while let Some(entry) = entries.next_entry().await? {
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push(entry.path());
                } else if file_type.is_symlink() && keys::points_to_dir(&entry.path()).await {
                    // Linked directories are neither listed nor descended
                    continue;
                } else {
                    files.push(entry.path());
                }
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn save(
        &self,
        content: &[u8],
        subdirectory: Subdirectory,
    ) -> StorageResult<StoredSubmission> {
        self.save_with_stamp(content, subdirectory, SubmissionStamp::now())
            .await
    }

    async fn list(&self, subdirectory: Subdirectory) -> StorageResult<Vec<SubmissionEntry>> {
        let dir = self.subdirectory_path(subdirectory);

        if !fs::try_exists(&dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let files = self.walk_files(&dir).await.map_err(|e| {
            StorageError::ListFailed(format!("Failed to walk {}: {}", dir.display(), e))
        })?;

        let mut entries: Vec<SubmissionEntry> = files
            .iter()
            .filter_map(|file| {
                let name = file.file_name()?.to_string_lossy().into_owned();
                let path = keys::to_reference(&self.root, file)?;
                Some(SubmissionEntry { name, path })
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!(
            subdirectory = %subdirectory,
            count = entries.len(),
            "Local storage list successful"
        );

        Ok(entries)
    }

    async fn read(&self, path: &str) -> StorageResult<SubmissionContent> {
        let target = self.resolve(path)?;
        let start = std::time::Instant::now();

        let raw = fs::read_to_string(&target).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path, e))
        })?;

        let size = raw.len();
        let content = SubmissionContent::from_raw(raw);

        tracing::info!(
            path = %target.display(),
            size_bytes = size,
            is_json = content.is_json,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage read successful"
        );

        Ok(content)
    }

    async fn delete(&self, path: &str) -> StorageResult<()> {
        let base = self.subdirectory_path(Subdirectory::Submissions);
        let target = self.key_to_path(path)?;

        if target == base || !keys::is_within(&target, &base) {
            tracing::warn!(
                path = %path,
                resolved = %target.display(),
                "Refusing to delete outside the submissions directory"
            );
            return Err(Self::outside(path, &base));
        }
        self.ensure_canonical_within(path, &target, &base).await?;

        let start = std::time::Instant::now();

        fs::remove_file(&target).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path, e))
        })?;

        tracing::info!(
            path = %target.display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage delete successful"
        );

        Ok(())
    }

    fn resolve(&self, path: &str) -> StorageResult<PathBuf> {
        let target = self.key_to_path(path)?;
        if keys::is_within(&target, &self.root) {
            Ok(target)
        } else {
            Err(Self::outside(path, &self.root))
        }
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE_NAME)
    }
}
