//! `/upload-data` and `/evaluate`: the uploaded-dataset routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use optiviz_solver::nearest_y;

use crate::app::state::AppState;
use crate::app::{dto, errors};

/// `POST /upload-data`: multipart form whose `file` field holds CSV rows
/// `x,y`. Replaces the stored dataset wholesale.
pub async fn upload_data(
    Extension(state): Extension<Arc<AppState>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
        };

        if field.name() != Some("file") {
            continue;
        }

        let csv = match field.text().await {
            Ok(csv) => csv,
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
        };

        return match dto::parse_csv(&csv) {
            Ok(points) => {
                let rows = state.replace_dataset(points);
                Json(json!({ "status": "ok", "rows": rows })).into_response()
            }
            Err(message) => errors::json_error(StatusCode::BAD_REQUEST, message),
        };
    }

    errors::json_error(StatusCode::BAD_REQUEST, "A file field is required.")
}

/// `POST /evaluate`: nearest-point lookup over the uploaded dataset.
///
/// This is deliberately not the spline the optimize routes use; the two
/// data paths are separate wire contracts.
pub async fn evaluate(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::EvaluateRequest>,
) -> axum::response::Response {
    let Some(points) = state.dataset() else {
        return errors::json_error(StatusCode::BAD_REQUEST, "No data uploaded");
    };

    match nearest_y(&points, body.x) {
        Some(y) => Json(json!({ "y": y })).into_response(),
        None => errors::json_error(StatusCode::BAD_REQUEST, "No data uploaded"),
    }
}
