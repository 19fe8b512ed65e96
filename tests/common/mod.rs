// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_tracker::config::Config;
use activity_tracker::db::{ActivityDb, FirestoreStore};
use activity_tracker::routes::create_router;
use activity_tracker::AppState;
use axum::{
    body::Body,
    http::{header, Request, Response},
};
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a Firestore-backed test database (emulator).
#[allow(dead_code)]
pub async fn test_db() -> ActivityDb {
    ActivityDb::connect(&activity_tracker::config::StoreConfig::Firestore {
        project_id: "test-project".to_string(),
    })
    .await
    .expect("Failed to connect to Firestore emulator")
}

/// Connect straight to the emulator's activity collection, for reading back
/// what the store handle wrote.
#[allow(dead_code)]
pub async fn test_store() -> FirestoreStore {
    FirestoreStore::connect("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

fn app_with_db(db: ActivityDb) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db,
    });
    (create_router(state.clone()), state)
}

/// Create a test app backed by an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    app_with_db(ActivityDb::new_memory())
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    app_with_db(ActivityDb::new_offline())
}

/// Serve a fresh in-memory app on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_test_server() -> String {
    let (app, _state) = create_test_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Base URL of a port with nothing listening on it.
#[allow(dead_code)]
pub async fn dead_server_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
