//! Test utilities for integration tests
use std::fs;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use taskbot::api::AppState;
use taskbot::api::app;
use taskbot::core::AppConfig;

/// Creates a test application router backed by fresh in-memory state and
/// a temporary directory of static assets. Every call gets its own state
/// so tests can run in parallel.
pub async fn test_app() -> Router {
    // Keep the directory for the life of the test process so the static
    // file service can keep reading from it
    let assets_dir = tempfile::tempdir()
        .expect("Failed to create temp dir")
        .keep();

    fs::write(
        assets_dir.join("index.html"),
        "<!doctype html><title>taskbot</title>",
    )
    .expect("Failed to write test asset");

    let app_config = AppConfig {
        greeting: String::from("Hello! How can I assist you with your to-do list today?"),
        assets_path: assets_dir.display().to_string(),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Collects a response body into a string
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not valid utf8")
}
