//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use sessionnotes_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Session Notes API",
        version = "0.1.0",
        description = "Backend for clinical session notes: liveness, API info, and audio uploads stored on disk or held in memory for immediate processing."
    ),
    paths(
        handlers::health::health_check,
        handlers::health::api_info,
        handlers::upload::upload_to_disk,
        handlers::upload::upload_to_memory,
    ),
    components(schemas(
        error::ErrorResponse,
        handlers::health::HealthResponse,
        handlers::health::ApiInfoResponse,
        handlers::upload::DiskUploadResponse,
        handlers::upload::MemoryUploadResponse,
        models::User,
        models::UserRole,
        models::Session,
        models::SessionStatus,
        models::Plan,
        models::PlanStatus,
    )),
    tags(
        (name = "health", description = "Liveness and API info"),
        (name = "uploads", description = "Audio uploads")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
