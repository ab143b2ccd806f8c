//! Storage setup and initialization

use anyhow::{Context, Result};
use formdrop_core::Config;
use formdrop_storage::{create_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(config).await.with_context(|| {
        format!(
            "Failed to initialize storage at {}",
            config.requests_dir().display()
        )
    })?;
    tracing::info!(
        root = %storage.root().display(),
        archive = %storage.archive_path().display(),
        "Storage initialized successfully"
    );

    Ok(storage)
}
