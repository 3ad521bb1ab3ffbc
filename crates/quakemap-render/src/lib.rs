//! HTML rendering for Quakemap.
//!
//! Turns a [`MapView`](quakemap_types::MapView) into a self-contained page
//! that mounts a Leaflet map: the base tile layers, the event overlay with
//! one circle marker per event, the layer switcher, and the magnitude
//! legend. Marker popups are rendered server-side so the browser only binds
//! ready HTML.

pub mod error;
pub mod page;

pub use error::RenderError;
pub use page::{format_magnitude, format_time, PageRenderer};
