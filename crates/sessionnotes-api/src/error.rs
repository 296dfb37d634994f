//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Storage and multipart
//! failures are mapped into `AppError` by `storage_error` and `multipart_error`,
//! so every error renders through the same status, body and logging path.

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sessionnotes_core::{AppError, Config, ErrorMetadata, LogLevel};
use sessionnotes_storage::StorageError;
use std::sync::OnceLock;
use utoipa::ToSchema;

/// Set once from `Config::is_production` during startup; unset means details are shown.
static HIDE_ERROR_DETAILS: OnceLock<bool> = OnceLock::new();

/// Decide, for the lifetime of the process, whether error bodies carry details.
pub fn configure_error_details(config: &Config) {
    if HIDE_ERROR_DETAILS.set(config.is_production()).is_err() {
        tracing::debug!("Error detail visibility already configured");
    }
}

fn hide_error_details() -> bool {
    HIDE_ERROR_DETAILS.get().copied().unwrap_or(false)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
    /// Suggested action for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from sessionnotes-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Requests that are not valid multipart (wrong content type, missing boundary)
/// become a 400 in our ErrorResponse format.
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid multipart request: {}",
            rejection.body_text()
        )))
    }
}

/// Map a storage failure to the app error taxonomy. Every storage failure is a server error.
pub fn storage_error(err: StorageError) -> AppError {
    match err {
        StorageError::WriteFailed(msg) => AppError::Storage(msg),
        StorageError::ConfigError(msg) => AppError::Internal(msg),
    }
}

/// Map a multipart stream failure. Body-limit overruns keep their 413.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Request body too large: {}", err.body_text()))
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

fn error_body(app_error: &AppError, hide_details: bool) -> ErrorResponse {
    ErrorResponse {
        error: app_error.client_message(),
        details: (!hide_details).then(|| app_error.to_string()),
        error_type: (!hide_details).then(|| app_error.error_type().to_string()),
        code: app_error.error_code().to_string(),
        recoverable: app_error.is_recoverable(),
        suggested_action: app_error.suggested_action().map(String::from),
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        // Details are hidden in production and for sensitive errors.
        let body = error_body(app_error, hide_error_details() || app_error.is_sensitive());

        (status, Json(body)).into_response()
    }
}
