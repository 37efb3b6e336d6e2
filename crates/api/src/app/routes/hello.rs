use axum::{response::IntoResponse, Json};

/// `GET /api/hello`: the frontend's connectivity check.
///
/// Pure handler: a fresh record per invocation, no shared state, and a
/// byte-for-byte stable body across calls.
pub async fn hello() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Hello from the Flask backend!",
    }))
}
