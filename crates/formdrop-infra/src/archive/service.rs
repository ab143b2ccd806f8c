use anyhow::{Context, Result};
use formdrop_core::constants::SUBMISSIONS_DIR;
use formdrop_core::Subdirectory;
use formdrop_storage::Storage;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of an archive build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub entries: usize,
}

/// Entry name inside the archive: the path relative to the submissions directory.
fn archive_entry_name(reference: &str) -> String {
    reference
        .strip_prefix(SUBMISSIONS_DIR)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(reference)
        .to_string()
}

/// Write every submission into `storage.archive_path()`, replacing any previous
/// archive.
///
/// One unreadable file aborts the whole build.
pub async fn create_submissions_archive(storage: Arc<dyn Storage>) -> Result<ArchiveSummary> {
    let entries = storage
        .list(Subdirectory::Submissions)
        .await
        .context("Failed to list submissions")?;

    let mut sources = Vec::with_capacity(entries.len());
    for entry in entries {
        let source = storage
            .resolve(&entry.path)
            .with_context(|| format!("Failed to resolve submission: {}", entry.path))?;
        sources.push((source, archive_entry_name(&entry.path)));
    }

    let archive_path = storage.archive_path();
    let start = std::time::Instant::now();

    let target = archive_path.clone();
    let count = tokio::task::spawn_blocking(move || write_zip_archive(&target, &sources))
        .await
        .context("Archive task failed")??;

    tracing::info!(
        path = %archive_path.display(),
        entries = count,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Submissions archive created"
    );

    Ok(ArchiveSummary {
        path: archive_path,
        entries: count,
    })
}

fn write_zip_archive(archive_path: &Path, sources: &[(PathBuf, String)]) -> Result<usize> {
    use zip::write::{FileOptions, ZipWriter};
    use zip::CompressionMethod;

    let file = File::create(archive_path)
        .with_context(|| format!("Failed to create archive: {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (source, name) in sources {
        let data = std::fs::read(source)
            .with_context(|| format!("Failed to read submission: {}", source.display()))?;

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add file to ZIP: {}", name))?;
        zip.write_all(&data)
            .with_context(|| format!("Failed to write file data to ZIP: {}", name))?;
    }

    zip.finish().context("Failed to finalize ZIP archive")?;

    Ok(sources.len())
}
