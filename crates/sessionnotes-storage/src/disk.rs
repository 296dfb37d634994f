use crate::keys::generate_filename;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::types::{StoredArtifact, StoredArtifactReference, UploadedFile};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    /// Create a new DiskStorage instance, creating `dir` (recursively) if missing.
    ///
    /// Call once at startup; the directory is not re-checked per upload.
    pub async fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        tracing::debug!(dir = %dir.display(), "Upload directory ready");

        Ok(DiskStorage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn write_new(&self, path: &Path, data: &[u8]) -> StorageResult<()> {
        // create_new: a name collision fails instead of overwriting.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| {
                StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
            })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl Storage for DiskStorage {
    async fn store(&self, file: UploadedFile) -> StorageResult<StoredArtifact> {
        let filename = generate_filename(&file.original_name);
        let path = self.dir.join(&filename);
        let size = file.size();
        let start = std::time::Instant::now();

        self.write_new(&path, &file.data).await?;

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Disk storage write successful"
        );

        Ok(StoredArtifact::Persisted(StoredArtifactReference {
            filename,
            path: path.display().to_string(),
            original_name: file.original_name,
            content_type: file.content_type,
            size,
        }))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Disk
    }
}
