use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Consistent `{"error": message}` error body, the wire shape the frontend
/// expects on every failed request.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
