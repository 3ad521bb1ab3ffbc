//! Feed summary statistics.

use quakemap_types::{BandCount, FeedSummary, Overlay};

use crate::legend::build_legend;

/// Count markers per color band and find the magnitude extremes.
///
/// Bands are listed in legend order. Markers are binned by their fill
/// color, so the counts agree with what is drawn.
pub fn summarize(overlay: &Overlay) -> FeedSummary {
    let bands = build_legend()
        .entries
        .into_iter()
        .map(|entry| BandCount {
            color: entry.color,
            count: overlay
                .markers
                .iter()
                .filter(|m| m.style.fill_color == entry.color)
                .count(),
            label: entry.label,
        })
        .collect();

    let magnitudes = || overlay.markers.iter().map(|m| m.popup.magnitude);

    FeedSummary {
        markers: overlay.markers.len(),
        skipped: overlay.skipped,
        max_magnitude: magnitudes().reduce(f64::max),
        min_magnitude: magnitudes().reduce(f64::min),
        bands,
    }
}
