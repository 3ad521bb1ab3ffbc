//! Magnitude scales shared by markers and the legend.
//!
//! Both functions are total: every `f64`, including negatives and NaN, maps
//! to a color and a radius. The legend and the marker transform call the
//! same [`color_range`] so the two can never disagree.

use quakemap_types::MagnitudeColor;

/// Radius in pixels per unit of magnitude.
pub const MARKER_SIZE_FACTOR: f64 = 5.0;

/// Inclusive lower bounds of the colored bands, highest first. Anything
/// below the last bound is [`MagnitudeColor::GreenYellow`].
pub const BAND_THRESHOLDS: [(f64, MagnitudeColor); 5] = [
    (5.0, MagnitudeColor::Crimson),
    (4.0, MagnitudeColor::OrangeRed),
    (3.0, MagnitudeColor::Orange),
    (2.0, MagnitudeColor::Gold),
    (1.0, MagnitudeColor::Yellow),
];

/// Map a magnitude to its color band.
///
/// A magnitude equal to a threshold belongs to the higher band.
pub fn color_range(magnitude: f64) -> MagnitudeColor {
    BAND_THRESHOLDS
        .iter()
        .find(|(bound, _)| magnitude >= *bound)
        .map_or(MagnitudeColor::GreenYellow, |(_, color)| *color)
}

/// Map a magnitude to a marker radius in pixels.
///
/// Linear, no clamping: non-positive magnitudes give non-positive radii.
pub fn marker_size(magnitude: f64) -> f64 {
    magnitude * MARKER_SIZE_FACTOR
}
