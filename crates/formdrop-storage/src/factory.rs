use crate::{LocalStorage, Storage, StorageResult};
use formdrop_core::Config;
use std::sync::Arc;

/// Create the storage backend rooted at the configured requests directory
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.requests_dir()).await?;

    tracing::info!(
        root = %storage.root().display(),
        "Local storage initialized"
    );

    Ok(Arc::new(storage))
}
