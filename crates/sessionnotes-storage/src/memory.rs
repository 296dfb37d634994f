use crate::traits::{Storage, StorageResult};
use crate::types::{HeldUpload, StoredArtifact, UploadedFile};
use crate::StorageBackend;
use async_trait::async_trait;

/// In-process storage: hands the bytes back to the caller and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryStorage;

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn store(&self, file: UploadedFile) -> StorageResult<StoredArtifact> {
        tracing::debug!(
            original_name = %file.original_name,
            size_bytes = file.size(),
            "Holding upload in memory"
        );

        Ok(StoredArtifact::Held(HeldUpload {
            original_name: file.original_name,
            content_type: file.content_type,
            data: file.data,
        }))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_returns_same_bytes() {
        let storage = MemoryStorage::new();
        let file = UploadedFile::new("clip.ogg", "audio/ogg", b"OggS....".to_vec());

        let artifact = storage.store(file).await.unwrap();
        let StoredArtifact::Held(held) = artifact else {
            panic!("memory storage must not persist");
        };
        assert_eq!(&held.data[..], b"OggS....");
        assert_eq!(held.size(), 8);
        assert_eq!(held.original_name, "clip.ogg");
    }

    #[tokio::test]
    async fn test_memory_storage_touches_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let before = std::fs::read_dir(dir.path()).unwrap().count();

        MemoryStorage::new()
            .store(UploadedFile::new("a.wav", "audio/wav", vec![0u8; 32]))
            .await
            .unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), before);
        assert_eq!(MemoryStorage::new().backend_type(), StorageBackend::Memory);
    }
}
