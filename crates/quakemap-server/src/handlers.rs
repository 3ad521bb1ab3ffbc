//! HTTP endpoint handlers for the map server.
//!
//! Every data-bearing handler performs exactly one feed read and runs the
//! transform on the result. Nothing is cached between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Interactive map page |
//! | `GET` | `/api/earthquakes` | Styled event markers |
//! | `GET` | `/api/legend` | Magnitude legend |
//! | `GET` | `/api/summary` | Per-band counts |
//! | `GET` | `/health` | Liveness probe |

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use quakemap_core::markers::OVERLAY_NAME;
use quakemap_core::{build_legend, summarize};
use quakemap_types::Overlay;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- map page
// ---------------------------------------------------------------------------

/// Serve the interactive map.
///
/// A failed feed read does not fail the page: the base layers and legend
/// still render, the overlay is empty, and a notice explains why.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let (overlay, notice) = match state.load_overlay().await {
        Ok(overlay) => (overlay, None),
        Err(e) => {
            warn!(error = %e, "feed read failed, serving map without events");
            (
                Overlay::empty(OVERLAY_NAME),
                Some(format!("Earthquake feed unavailable: {e}")),
            )
        }
    };

    let view = state.map_view(overlay);
    let html = state.renderer.render_page(&view, notice.as_deref())?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// GET /api/earthquakes -- styled markers
// ---------------------------------------------------------------------------

/// Return the overlay markers with their radius, style, and popup data.
pub async fn list_earthquakes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let overlay = state.load_overlay().await?;

    let body = serde_json::json!({
        "name": overlay.name,
        "count": overlay.markers.len(),
        "skipped": overlay.skipped,
        "markers": serde_json::to_value(&overlay.markers)?,
    });
    Ok(Json(body))
}

// ---------------------------------------------------------------------------
// GET /api/legend -- legend rows
// ---------------------------------------------------------------------------

/// Return the magnitude legend. Needs no feed read.
pub async fn get_legend() -> impl IntoResponse {
    Json(build_legend())
}

// ---------------------------------------------------------------------------
// GET /api/summary -- per-band counts
// ---------------------------------------------------------------------------

/// Return marker counts per color band and the magnitude extremes.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let overlay = state.load_overlay().await?;
    Ok(Json(summarize(&overlay)))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
