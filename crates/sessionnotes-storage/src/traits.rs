//! Storage abstraction trait
//!
//! This module defines the Storage trait that both upload backends implement.

use crate::types::{StoredArtifact, UploadedFile};
use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Receives a file that has already passed validation. Implementations decide
/// whether the bytes outlive the request.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store a validated upload and return a reference to the result
    async fn store(&self, file: UploadedFile) -> StorageResult<StoredArtifact>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
