//! Map composition types: base layers, layer control, legend, and the
//! assembled [`MapView`] handed to the page renderer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::marker::{MagnitudeColor, Overlay};

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A background imagery tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TileLayer {
    /// Display name in the layer control (e.g. `Street Map`).
    pub name: String,
    /// Tile URL template with `{id}`, `{z}`, `{x}`, `{y}` and
    /// `{accessToken}` placeholders.
    pub url_template: String,
    /// Imagery style identifier substituted for `{id}`.
    pub style_id: String,
    /// Attribution HTML shown in the map corner.
    pub attribution: String,
    /// Maximum zoom level served by the provider.
    pub max_zoom: u8,
    /// Imagery provider credential substituted for `{accessToken}`.
    pub access_token: String,
}

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ControlPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    BottomRight,
}

/// The base-layer / overlay switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayerControl {
    /// Names of the selectable base layers, in display order.
    pub base_layers: Vec<String>,
    /// Names of the togglable overlays.
    pub overlays: Vec<String>,
    /// Whether the control starts collapsed into an icon.
    pub collapsed: bool,
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegendEntry {
    /// Lower magnitude bound of the row.
    pub grade: u8,
    /// Row label, e.g. `2–3` or `5+`.
    pub label: String,
    /// Swatch color.
    pub color: MagnitudeColor,
}

/// Static legend mapping magnitude bands to colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Legend {
    /// Anchor corner.
    pub position: ControlPosition,
    /// Rows, lowest grade first.
    pub entries: Vec<LegendEntry>,
}

/// Everything needed to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MapView {
    /// DOM element id the map mounts into.
    pub container_id: String,
    /// Initial center.
    pub center: LatLng,
    /// Initial zoom level.
    pub zoom: u8,
    /// Selectable base layers. The first is shown on load.
    pub base_layers: Vec<TileLayer>,
    /// The event marker overlay, shown on load.
    pub overlay: Overlay,
    /// Layer switcher.
    pub layer_control: LayerControl,
    /// Magnitude legend.
    pub legend: Legend,
}
