//! Route definitions for the icon service.
//!
//! ## Routes
//!
//! - `GET /health` - Health check (JSON)
//! - `GET /api/icons` - Composite SVG of the requested icons

mod health;
pub mod icons;

use axum::Router;
use axum::http::Request;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::state::AppState;

/// Build the complete icon service router, middleware included.
///
/// Images are embedded cross-origin, so CORS is open; every request gets an
/// `http_request` span carrying its method and path.
pub fn router(state: AppState) -> Router {
    let api = Router::new().route("/icons", get(icons::icons_handler));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::span!(
                    Level::INFO,
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
