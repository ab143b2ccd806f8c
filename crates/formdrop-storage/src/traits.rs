//! Storage abstraction trait
//!
//! This module defines the Storage trait the route layer and archive builder
//! work against.

use async_trait::async_trait;
use formdrop_core::{Subdirectory, SubmissionContent, SubmissionEntry};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("{0}")]
    ReadFailed(String),

    #[error("{0}")]
    DeleteFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Path {path} resolves outside {base}")]
    OutsideRoot { path: String, base: String },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Where a save landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSubmission {
    pub identifier: String,
    /// Path relative to the storage root, usable with read and delete.
    pub path: String,
}

/// Storage abstraction trait
///
/// **Paths:** every `path` argument is `/`-separated and relative to the
/// storage root, the same form `list` returns.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `content` unchanged as `<subdirectory>/<YYYY>/<Month>/<identifier>.json`,
    /// creating missing directories.
    async fn save(
        &self,
        content: &[u8],
        subdirectory: Subdirectory,
    ) -> StorageResult<StoredSubmission>;

    /// Every file below `subdirectory`, recursively, sorted by path. No
    /// filename filter is applied. A missing directory lists as empty.
    async fn list(&self, subdirectory: Subdirectory) -> StorageResult<Vec<SubmissionEntry>>;

    /// Read a file as text, pretty-printed when it parses as JSON.
    async fn read(&self, path: &str) -> StorageResult<SubmissionContent>;

    /// Remove a file. Refused with `OutsideRoot` unless the target lies inside
    /// the submissions directory.
    async fn delete(&self, path: &str) -> StorageResult<()>;

    /// Absolute filesystem path for `path`, refused if it leaves the storage root.
    fn resolve(&self, path: &str) -> StorageResult<PathBuf>;

    /// Absolute storage root.
    fn root(&self) -> &Path;

    /// Where the bulk download archive is written.
    fn archive_path(&self) -> PathBuf;
}
