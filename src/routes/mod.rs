//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON endpoints and falls back to the static site directory, so
//! paths returned by `/api/images` resolve to the files themselves.

pub mod images;
pub mod status;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON endpoints.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/api/images", get(images::list_images))
        .route("/api/test", get(status::test_message))
        .route("/healthz", get(status::healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus the static site as fallback.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(&state.config.static_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
