//! Rendered marker types.
//!
//! A [`CircleMarker`] is the visual projection of one feed feature: a
//! position, a magnitude-derived radius and color, a fixed stroke style, and
//! the popup content shown when the marker is clicked.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The six magnitude color bands, highest first.
///
/// Serializes to the CSS named color (`"crimson"`, `"orangered"`, ...) so the
/// value can be handed to the browser unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MagnitudeColor {
    /// Magnitude 5.0 and above.
    Crimson,
    /// Magnitude 4.0 up to 5.0.
    OrangeRed,
    /// Magnitude 3.0 up to 4.0.
    Orange,
    /// Magnitude 2.0 up to 3.0.
    Gold,
    /// Magnitude 1.0 up to 2.0.
    Yellow,
    /// Below magnitude 1.0, including negative values.
    GreenYellow,
}

impl MagnitudeColor {
    /// All bands from highest to lowest.
    pub const ALL: [Self; 6] = [
        Self::Crimson,
        Self::OrangeRed,
        Self::Orange,
        Self::Gold,
        Self::Yellow,
        Self::GreenYellow,
    ];

    /// The CSS named color for this band.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Crimson => "crimson",
            Self::OrangeRed => "orangered",
            Self::Orange => "orange",
            Self::Gold => "gold",
            Self::Yellow => "yellow",
            Self::GreenYellow => "greenyellow",
        }
    }
}

impl fmt::Display for MagnitudeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_css())
    }
}

/// Stroke and fill styling of a circle marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MarkerStyle {
    /// Fill color derived from magnitude.
    pub fill_color: MagnitudeColor,
    /// Stroke color (CSS).
    pub color: String,
    /// Stroke width in pixels.
    pub weight: f64,
    /// Stroke opacity, 0.0 to 1.0.
    pub opacity: f64,
    /// Fill opacity, 0.0 to 1.0.
    pub fill_opacity: f64,
}

/// Content of the popup bound to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventPopup {
    /// Event magnitude as used for styling.
    pub magnitude: f64,
    /// Location description; empty when the feed has none.
    pub place: String,
    /// Origin time, if the feed supplied a representable timestamp.
    pub time: Option<DateTime<Utc>>,
}

/// A circle marker ready to be drawn on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CircleMarker {
    /// Feed event identifier, when present.
    pub id: Option<String>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Radius in pixels. Zero or negative for non-positive magnitudes.
    pub radius: f64,
    /// Stroke and fill styling.
    pub style: MarkerStyle,
    /// Popup content.
    pub popup: EventPopup,
}

/// A named, togglable layer of event markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Overlay {
    /// Display name in the layer control.
    pub name: String,
    /// Markers in feed order.
    pub markers: Vec<CircleMarker>,
    /// Number of features that produced no marker (missing or non-point
    /// geometry).
    pub skipped: usize,
}

impl Overlay {
    /// An overlay with no markers, used when the feed could not be read.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            markers: Vec::new(),
            skipped: 0,
        }
    }
}
