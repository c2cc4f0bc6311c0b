//! Shared assertions.

use axum::http::StatusCode;

use super::TestResponse;

/// Exact body served by `GET /health`.
pub const HEALTH_BODY: &str = r#"{"status":"OK WORKING"}"#;

/// Asserts a complete, byte-exact liveness response.
pub fn assert_health_ok(response: &TestResponse) {
    response
        .assert_status(StatusCode::OK)
        .assert_content_type_contains("application/json");

    assert_eq!(response.text(), HEALTH_BODY);
}
