use anyhow::{Context, Result};
use sessionnotes_core::Config;
use sessionnotes_storage::{create_storage, Storage, StorageBackend};
use std::sync::Arc;

/// Create the disk and memory backends. Creates the upload directory if missing.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    let disk = create_storage(StorageBackend::Disk, config)
        .await
        .context("Failed to initialize disk storage")?;
    let memory = create_storage(StorageBackend::Memory, config)
        .await
        .context("Failed to initialize memory storage")?;

    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        max_upload_size_bytes = config.max_upload_size_bytes(),
        "Upload storage initialized"
    );

    Ok((disk, memory))
}
