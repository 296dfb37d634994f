//! Test helpers: build the router over a temporary upload directory.
//!
//! Run from workspace root: `cargo test -p sessionnotes-api`.

pub mod fixtures;

use axum_test::TestServer;
use sessionnotes_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the temp dir backing the disk backend.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Sorted names of the files currently in the upload directory.
    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("upload dir must exist")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the config first.
pub async fn setup_test_app_with<F>(configure: F) -> TestApp
where
    F: FnOnce(&mut Config),
{
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("uploads");

    let mut config = Config::default();
    config.uploads.upload_dir = upload_dir.clone();
    configure(&mut config);

    let (_state, app) = sessionnotes_api::setup::build_app(config)
        .await
        .expect("Failed to build app");

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}
