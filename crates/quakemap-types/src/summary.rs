//! Aggregate statistics over a rendered overlay.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::marker::MagnitudeColor;

/// Number of markers falling in one color band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BandCount {
    /// The band.
    pub color: MagnitudeColor,
    /// Legend label of the band.
    pub label: String,
    /// Markers in the band.
    pub count: usize,
}

/// Summary of one feed read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FeedSummary {
    /// Markers drawn.
    pub markers: usize,
    /// Features without a usable point location.
    pub skipped: usize,
    /// Largest magnitude among markers.
    pub max_magnitude: Option<f64>,
    /// Smallest magnitude among markers.
    pub min_magnitude: Option<f64>,
    /// Per-band counts in legend order (lowest band first).
    pub bands: Vec<BandCount>,
}
