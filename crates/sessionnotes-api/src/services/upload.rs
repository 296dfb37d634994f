//! Upload ingestion service
//!
//! Pipeline: extract → validate type → read with size limit → store.
//! Nothing reaches a storage backend until the single file part has been read
//! completely and passed validation, so a rejected request writes nothing.

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use axum::http::header;
use bytes::{Bytes, BytesMut};
use sessionnotes_core::constants::UPLOAD_FIELD_NAME;
use sessionnotes_core::{AppError, UploadValidator};
use sessionnotes_storage::{Storage, StoredArtifact, UploadedFile};

use crate::error::{multipart_error, storage_error};

/// Name used when the file part carries no filename.
const UNKNOWN_FILENAME: &str = "unknown";

/// Upload ingestion service, shared by both upload routes
#[derive(Clone, Copy, Debug)]
pub struct UploadService {
    validator: UploadValidator,
}

impl UploadService {
    pub fn new(validator: UploadValidator) -> Self {
        Self { validator }
    }

    pub fn max_file_size(&self) -> usize {
        self.validator.max_file_size()
    }

    /// Read the single file part from `multipart`, validate it, and hand it to `storage`.
    pub async fn upload(
        &self,
        storage: &dyn Storage,
        multipart: Multipart,
    ) -> Result<StoredArtifact, AppError> {
        let file = self.extract_and_validate(multipart).await?;

        tracing::info!(
            original_name = %file.original_name,
            content_type = %file.content_type,
            size_bytes = file.size(),
            backend = %storage.backend_type(),
            "Processing upload"
        );

        storage.store(file).await.map_err(|e| {
            tracing::error!(error = %e, backend = %storage.backend_type(), "Failed to store upload");
            storage_error(e)
        })
    }

    /// Extract the file part named `file`.
    ///
    /// Plain text fields are ignored. A second `file` part, or a file part under any
    /// other name, rejects the whole request.
    async fn extract_and_validate(&self, mut multipart: Multipart) -> Result<UploadedFile, AppError> {
        let mut upload: Option<UploadedFile> = None;

        while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
            let field_name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);

            if field_name != UPLOAD_FIELD_NAME {
                if file_name.is_some() {
                    return Err(AppError::InvalidInput(format!(
                        "Unexpected file field '{}'; send exactly one file field named '{}'",
                        field_name, UPLOAD_FIELD_NAME
                    )));
                }
                continue;
            }

            if upload.is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Multiple file fields are not allowed; send exactly one field named '{}'",
                    UPLOAD_FIELD_NAME
                )));
            }

            // The declared header as sent: `Field::content_type` normalizes case.
            let content_type = field
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
            self.validator.validate_content_type(content_type.as_deref())?;

            let data = self.read_limited(&mut field).await?;

            upload = Some(UploadedFile::new(
                file_name.unwrap_or_else(|| UNKNOWN_FILENAME.to_string()),
                content_type.unwrap_or_default(),
                data,
            ));
        }

        upload.ok_or_else(|| {
            AppError::InvalidInput(format!(
                "No file provided; send one field named '{}'",
                UPLOAD_FIELD_NAME
            ))
        })
    }

    /// Read a part chunk by chunk, failing as soon as the running total passes the limit.
    async fn read_limited(&self, field: &mut Field<'_>) -> Result<Bytes, AppError> {
        let mut buffer = BytesMut::new();

        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            self.validator.validate_size(buffer.len() + chunk.len())?;
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer.freeze())
    }
}
