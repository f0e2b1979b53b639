// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use family_fitness::config::Config;
use family_fitness::routes::create_router;
use family_fitness::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with default config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Config::default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// POST a JSON body and return the status and parsed response.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Activity JSON whose local time equals its UTC time.
#[allow(dead_code)]
pub fn activity(sport: &str, workout_type: &str, seconds: u64, start: &str) -> Value {
    json!({
        "type": sport,
        "workout_type": workout_type,
        "moving_time_seconds": seconds,
        "start_date": start,
        "start_date_local": start,
    })
}
