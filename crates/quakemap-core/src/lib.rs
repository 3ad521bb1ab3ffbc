//! Feature transform and map composition for Quakemap.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! logging. The pipeline is:
//!
//! ```text
//! FeatureCollection --> build_overlay --> compose_map --> MapView
//!                                    \--> summarize  --> FeedSummary
//! ```
//!
//! # Modules
//!
//! - [`scale`] -- magnitude to color band and marker radius
//! - [`markers`] -- feature to circle marker, overlay assembly
//! - [`legend`] -- six-band legend sharing the marker color scale
//! - [`map`] -- base layers, layer control, and the assembled map view
//! - [`summary`] -- per-band counts for a feed read
//! - [`config`] -- YAML configuration with environment overrides

pub mod config;
pub mod legend;
pub mod map;
pub mod markers;
pub mod scale;
pub mod summary;

pub use config::{ConfigError, QuakemapConfig};
pub use legend::build_legend;
pub use map::compose_map;
pub use markers::{build_overlay, to_marker};
pub use scale::{color_range, marker_size};
pub use summary::summarize;
