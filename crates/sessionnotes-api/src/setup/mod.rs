//! Application setup and initialization
//!
//! Startup order: validate config → tracing and error detail policy → upload
//! directory → state → routes.
//! The upload directory exists before the listener binds.

pub mod routes;
pub mod server;
pub mod storage;

use crate::services::UploadService;
use crate::state::{AppState, UploadState};
use anyhow::{Context, Result};
use sessionnotes_core::{Config, UploadValidator};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;
    crate::error::configure_error_details(&config);

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    build_app(config).await
}

/// Build state and router without touching global tracing state.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let (disk, memory) = storage::setup_storage(&config).await?;

    let service = UploadService::new(UploadValidator::new(config.max_upload_size_bytes()));
    let state = Arc::new(AppState {
        config: config.clone(),
        uploads: UploadState {
            service,
            disk,
            memory,
        },
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
