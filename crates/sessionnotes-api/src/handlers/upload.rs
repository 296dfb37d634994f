//! Audio upload handlers.
//!
//! Both routes share `UploadService`; they differ only in the storage backend
//! they pass to it.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sessionnotes_storage::{HeldUpload, Storage, StoredArtifact, StoredArtifactReference};
use std::sync::Arc;
use utoipa::ToSchema;

const NOT_RETAINED_NOTE: &str =
    "File was held in memory for this request only and has not been stored";

/// Response for a disk-backed upload
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiskUploadResponse {
    /// Always "disk"
    pub storage: String,
    pub persisted: bool,
    /// Generated name: `{unix_millis}-{random}-{original_name}`
    pub filename: String,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: usize,
}

impl From<StoredArtifactReference> for DiskUploadResponse {
    fn from(reference: StoredArtifactReference) -> Self {
        Self {
            storage: "disk".to_string(),
            persisted: true,
            filename: reference.filename,
            path: reference.path,
            original_name: reference.original_name,
            mime_type: reference.content_type,
            size: reference.size,
        }
    }
}

/// Response for a memory-backed upload. Carries no durable reference.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUploadResponse {
    /// Always "memory"
    pub storage: String,
    /// Always false: the bytes do not outlive the request
    pub persisted: bool,
    pub original_name: String,
    pub mime_type: String,
    pub size: usize,
    pub note: String,
}

impl From<&HeldUpload> for MemoryUploadResponse {
    fn from(held: &HeldUpload) -> Self {
        Self {
            storage: "memory".to_string(),
            persisted: false,
            original_name: held.original_name.clone(),
            mime_type: held.content_type.clone(),
            size: held.size(),
            note: NOT_RETAINED_NOTE.to_string(),
        }
    }
}

fn artifact_response(artifact: StoredArtifact) -> Response {
    match artifact {
        StoredArtifact::Persisted(reference) => {
            (StatusCode::CREATED, Json(DiskUploadResponse::from(reference))).into_response()
        }
        StoredArtifact::Held(held) => {
            let response = MemoryUploadResponse::from(&held);
            // `held` drops here; nothing is kept past the response.
            (StatusCode::OK, Json(response)).into_response()
        }
    }
}

async fn handle_upload(
    state: &AppState,
    storage: &dyn Storage,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    let multipart = multipart?;
    let artifact = state.uploads.service.upload(storage, multipart).await?;
    Ok(artifact_response(artifact))
}

#[utoipa::path(
    post,
    path = "/uploads",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "One audio file in field 'file'"),
    responses(
        (status = 201, description = "File written to the upload directory", body = DiskUploadResponse),
        (status = 400, description = "Unsupported MIME type or malformed request", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload limit", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(backend = "disk", operation = "upload"))]
pub async fn upload_to_disk(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    handle_upload(&state, state.uploads.disk.as_ref(), multipart).await
}

#[utoipa::path(
    post,
    path = "/uploads/memory",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "One audio file in field 'file'"),
    responses(
        (status = 200, description = "File accepted and held for this request only", body = MemoryUploadResponse),
        (status = 400, description = "Unsupported MIME type or malformed request", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload limit", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(backend = "memory", operation = "upload"))]
pub async fn upload_to_memory(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, HttpAppError> {
    handle_upload(&state, state.uploads.memory.as_ref(), multipart).await
}
