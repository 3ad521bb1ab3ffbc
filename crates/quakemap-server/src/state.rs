//! Shared application state for the map server.
//!
//! [`AppState`] holds everything a request needs to run the pipeline: the
//! feed source, the map layout, the imagery credential, and the page
//! renderer. None of it changes after startup, so handlers share it through
//! an [`Arc`](std::sync::Arc) without locking.

use quakemap_core::config::MapConfig;
use quakemap_core::{build_overlay, compose_map};
use quakemap_feed::{FeedError, FeedSource};
use quakemap_render::PageRenderer;
use quakemap_types::{MapView, Overlay};

/// Shared state for the Axum application.
pub struct AppState {
    /// Where each request reads events from.
    pub feed: FeedSource,
    /// Map layout.
    pub map: MapConfig,
    /// Imagery provider credential handed to every base layer.
    pub access_token: String,
    /// Page renderer with templates loaded.
    pub renderer: PageRenderer,
}

impl AppState {
    /// Create application state.
    pub const fn new(
        feed: FeedSource,
        map: MapConfig,
        access_token: String,
        renderer: PageRenderer,
    ) -> Self {
        Self {
            feed,
            map,
            access_token,
            renderer,
        }
    }

    /// Read the feed once and build the marker overlay.
    ///
    /// # Errors
    ///
    /// Propagates the [`FeedError`] from the read.
    pub async fn load_overlay(&self) -> Result<Overlay, FeedError> {
        let collection = self.feed.fetch().await?;
        Ok(build_overlay(&collection))
    }

    /// Compose the map around an overlay.
    pub fn map_view(&self, overlay: Overlay) -> MapView {
        compose_map(overlay, &self.map, &self.access_token)
    }
}
