//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p formdrop-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use formdrop_api::setup;
use formdrop_api::setup::routes;
use formdrop_core::{Config, Subdirectory, SubmissionEntry};
use formdrop_storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server, storage handle, and the temporary root it owns.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Absolute storage root (`<tmp>/requests`).
    pub fn root(&self) -> &Path {
        self.storage.root()
    }

    pub fn file(&self, reference: &str) -> PathBuf {
        self.root().join(reference)
    }

    pub async fn submissions(&self) -> Vec<SubmissionEntry> {
        self.storage
            .list(Subdirectory::Submissions)
            .await
            .expect("list submissions")
    }
}

/// Setup test app with local storage under a fresh temporary directory.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = Config::with_requests_dir(temp_dir.path().join("requests"));

    let state = setup::build_state(config).await.expect("build state");
    let storage = state.storage.clone();
    let router = routes::setup_routes(&state.config, state.clone());
    let server = TestServer::new(router).expect("start test server");

    TestApp {
        server,
        storage,
        _temp_dir: temp_dir,
    }
}

/// Undo askama's HTML escaping so page text can be compared with stored content.
pub fn unescape_html(html: &str) -> String {
    html.replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2f;", "/")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
