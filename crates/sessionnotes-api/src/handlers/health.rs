//! Liveness and API info handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const API_MESSAGE: &str = "Session Notes API";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving requests
    pub status: String,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub timestamp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
}

/// Liveness probe - process is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is alive", body = HealthResponse))
)]
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}

/// API root.
#[utoipa::path(
    get,
    path = "/api",
    tag = "health",
    responses((status = 200, description = "API identifier", body = ApiInfoResponse))
)]
pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfoResponse {
        message: API_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
