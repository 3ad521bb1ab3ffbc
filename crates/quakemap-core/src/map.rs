//! Map composition: base layers, overlay, layer control, and legend.

use quakemap_types::{LatLng, LayerControl, MapView, Overlay, TileLayer};
use tracing::{info, warn};

use crate::config::MapConfig;
use crate::legend::build_legend;

/// Assemble the full map description.
///
/// The imagery credential is passed in explicitly and copied onto every
/// base layer. An empty token still produces a map; the tiles will simply
/// be refused by the provider, so a warning is logged.
pub fn compose_map(overlay: Overlay, config: &MapConfig, access_token: &str) -> MapView {
    if access_token.is_empty() {
        warn!("imagery access token is empty, base layer tiles will not load");
    }

    let base_layers: Vec<TileLayer> = config
        .base_layers
        .iter()
        .map(|layer| TileLayer {
            name: layer.name.clone(),
            url_template: config.tile_url.clone(),
            style_id: layer.style_id.clone(),
            attribution: config.attribution.clone(),
            max_zoom: config.max_zoom,
            access_token: access_token.to_owned(),
        })
        .collect();

    let layer_control = LayerControl {
        base_layers: base_layers.iter().map(|l| l.name.clone()).collect(),
        overlays: vec![overlay.name.clone()],
        collapsed: false,
    };

    info!(
        markers = overlay.markers.len(),
        base_layers = base_layers.len(),
        zoom = config.zoom,
        "map composed"
    );

    MapView {
        container_id: config.container_id.clone(),
        center: LatLng {
            lat: config.center_lat,
            lng: config.center_lng,
        },
        zoom: config.zoom,
        base_layers,
        overlay,
        layer_control,
        legend: build_legend(),
    }
}
