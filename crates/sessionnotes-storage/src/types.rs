//! Upload and artifact types passed between the endpoint and the backends.

use bytes::Bytes;

/// One multipart file part, read completely into memory.
///
/// `original_name` and `content_type` are whatever the client sent.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(
        original_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Reference to bytes written by the disk backend.
///
/// The declared MIME type was trusted; the bytes are not guaranteed to be audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifactReference {
    pub filename: String,
    /// Path of the artifact, relative to the working directory when the upload
    /// directory is relative
    pub path: String,
    pub original_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Bytes held by the memory backend. Dropped with the request.
#[derive(Debug, Clone)]
pub struct HeldUpload {
    pub original_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl HeldUpload {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Result of `Storage::store`
#[derive(Debug, Clone)]
pub enum StoredArtifact {
    Persisted(StoredArtifactReference),
    Held(HeldUpload),
}
