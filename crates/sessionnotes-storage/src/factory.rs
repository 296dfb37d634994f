use crate::{DiskStorage, MemoryStorage, Storage, StorageBackend, StorageResult};
use sessionnotes_core::Config;
use std::sync::Arc;

/// Create a storage backend of the given type from configuration.
///
/// For `Disk` this creates the upload directory.
pub async fn create_storage(
    backend: StorageBackend,
    config: &Config,
) -> StorageResult<Arc<dyn Storage>> {
    match backend {
        StorageBackend::Disk => {
            let storage = DiskStorage::new(config.upload_dir().clone()).await?;
            Ok(Arc::new(storage))
        }
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
    }
}
