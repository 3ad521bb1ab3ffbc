//! Shared type definitions for Quakemap.
//!
//! This crate holds the data model used across the workspace: the GeoJSON
//! feed document consumed from the network, and the marker, legend, and map
//! types produced from it. Output types are exported to `TypeScript` via
//! `ts-rs` for browser-side consumers of the JSON API.
//!
//! # Modules
//!
//! - [`feed`] -- GeoJSON `FeatureCollection` as served by the event feed
//! - [`marker`] -- Circle markers, color bands, popups, overlay layer
//! - [`map`] -- Base layers, layer control, legend, assembled map view
//! - [`summary`] -- Per-band aggregate counts for a feed read

pub mod feed;
pub mod map;
pub mod marker;
pub mod summary;

pub use feed::{EventProperties, Feature, FeatureCollection, FeedMetadata, Geometry};
pub use map::{ControlPosition, LatLng, LayerControl, Legend, LegendEntry, MapView, TileLayer};
pub use marker::{CircleMarker, EventPopup, MagnitudeColor, MarkerStyle, Overlay};
pub use summary::{BandCount, FeedSummary};
