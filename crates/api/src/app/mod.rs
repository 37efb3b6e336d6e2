//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `state.rs`: shared application state (the uploaded dataset)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The route table is assembled once here and never changes afterwards.
/// CORS is fully permissive; the browser frontend is served from a
/// different origin.
pub fn build_app() -> Router {
    let state = Arc::new(state::AppState::default());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/hello", get(routes::hello::hello))
        .nest("/api/optimize", routes::optimize::router())
        .route("/upload-data", post(routes::data::upload_data))
        .route("/evaluate", post(routes::data::evaluate))
        .layer(ServiceBuilder::new().layer(Extension(state)).layer(cors))
}
