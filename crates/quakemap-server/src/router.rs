//! Axum router construction for the map server.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- interactive map page
/// - `GET /api/earthquakes` -- styled markers
/// - `GET /api/legend` -- legend rows
/// - `GET /api/summary` -- per-band counts
/// - `GET /health` -- liveness probe
///
/// CORS allows any origin with `GET` only; the API is read-only.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/earthquakes", get(handlers::list_earthquakes))
        .route("/api/legend", get(handlers::get_legend))
        .route("/api/summary", get(handlers::get_summary))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
