//! Error types for the map API server.
//!
//! [`ApiError`] unifies request-time failures into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quakemap_feed::FeedError;
use quakemap_render::RenderError;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The upstream event feed could not be read or parsed.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// The page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Feed(_) => StatusCode::BAD_GATEWAY,
            Self::Render(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
