//! Map server for Quakemap.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Map page** (`GET /`) -- the interactive Leaflet map with event
//!   markers, base-layer switcher, and legend
//! - **JSON API** (`/api/...`) -- the same markers, legend, and a per-band
//!   summary for other clients
//!
//! Each request reads the feed once and runs the full transform; there is
//! no background refresh and no cache.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
