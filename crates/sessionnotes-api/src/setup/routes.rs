//! Route configuration and setup.

use crate::handlers::{health, upload};
use crate::middleware::request_id_middleware;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use sessionnotes_core::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // The multipart reader enforces the per-file limit itself; the body limit only
    // has to leave room for one maximal file plus boundaries and part headers.
    let upload_body_limit = config.upload_body_limit_bytes()?;

    let upload_routes = Router::new()
        .route("/uploads", post(upload::upload_to_disk))
        .route("/uploads/memory", post(upload::upload_to_memory))
        .layer(DefaultBodyLimit::max(upload_body_limit));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api", get(health::api_info))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        );

    tracing::info!(
        http_concurrency_limit = config.http_concurrency_limit(),
        request_timeout_secs = config.request_timeout_secs(),
        upload_body_limit,
        "Router layers configured"
    );

    let app = public_routes
        .merge(upload_routes)
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(config.http_concurrency_limit()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs(),
        )))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let request_id = HeaderName::from_static("x-request-id");
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .expose_headers([request_id])
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .expose_headers([request_id])
    };
    Ok(cors)
}
