// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use smartwatch_dashboard::config::Config;
use smartwatch_dashboard::routes::create_router;
use smartwatch_dashboard::services::Dataset;
use smartwatch_dashboard::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Small fixture with two users over three days.
pub const FIXTURE_PATH: &str = "tests/fixtures/activity_small.csv";

/// Load the small fixture dataset.
#[allow(dead_code)]
pub fn fixture_dataset() -> Dataset {
    Dataset::load_from_file(FIXTURE_PATH).expect("Failed to load fixture - is tests/fixtures/ present?")
}

/// Create a test app over the fixture dataset.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        dataset: fixture_dataset(),
    });

    (create_router(state.clone()), state)
}

/// Issue a GET and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).expect("Response body should be JSON");
    (status, json)
}
