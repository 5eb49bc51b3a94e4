//! Liveness endpoints.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TestMessage {
    pub message: &'static str,
}

/// `GET /api/test` — fixed JSON body confirming the API is reachable.
pub async fn test_message() -> Json<TestMessage> {
    Json(TestMessage { message: "Test endpoint works" })
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
