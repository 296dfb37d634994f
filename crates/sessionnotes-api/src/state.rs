//! Application state.

use crate::services::UploadService;
use sessionnotes_core::Config;
use sessionnotes_storage::Storage;
use std::sync::Arc;

/// Upload service plus the backend bound to each upload route.
#[derive(Clone)]
pub struct UploadState {
    pub service: UploadService,
    /// Backend for `POST /uploads`
    pub disk: Arc<dyn Storage>,
    /// Backend for `POST /uploads/memory`
    pub memory: Arc<dyn Storage>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub uploads: UploadState,
}
