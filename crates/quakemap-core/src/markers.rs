//! Feature-to-marker transform.
//!
//! Each point feature becomes one [`CircleMarker`] whose radius and fill
//! color come from [`crate::scale`]. Features without a point location are
//! counted and skipped; they never fail the whole overlay.

use chrono::{DateTime, Utc};
use quakemap_types::{CircleMarker, EventPopup, Feature, FeatureCollection, MarkerStyle, Overlay};
use tracing::debug;

use crate::scale::{color_range, marker_size};

/// Display name of the event overlay in the layer control.
pub const OVERLAY_NAME: &str = "Earthquakes";

/// Marker stroke color.
pub const STROKE_COLOR: &str = "white";

/// Marker stroke width in pixels.
pub const STROKE_WEIGHT: f64 = 0.5;

/// Marker stroke opacity.
pub const STROKE_OPACITY: f64 = 0.5;

/// Marker fill opacity.
pub const FILL_OPACITY: f64 = 0.8;

/// Magnitude used for styling. Missing magnitudes count as zero.
pub fn effective_magnitude(feature: &Feature) -> f64 {
    feature.properties.mag.unwrap_or(0.0)
}

/// Style for a marker of the given magnitude.
pub fn marker_style(magnitude: f64) -> MarkerStyle {
    MarkerStyle {
        fill_color: color_range(magnitude),
        color: STROKE_COLOR.to_owned(),
        weight: STROKE_WEIGHT,
        opacity: STROKE_OPACITY,
        fill_opacity: FILL_OPACITY,
    }
}

/// Popup content for a feature.
pub fn event_popup(feature: &Feature) -> EventPopup {
    EventPopup {
        magnitude: effective_magnitude(feature),
        place: feature.properties.place.clone().unwrap_or_default(),
        time: feature
            .properties
            .time
            .and_then(DateTime::<Utc>::from_timestamp_millis),
    }
}

/// Project a feature into a circle marker.
///
/// Returns `None` when the feature has no point geometry.
pub fn to_marker(feature: &Feature) -> Option<CircleMarker> {
    let (lat, lng) = feature.lat_lng()?;
    let magnitude = effective_magnitude(feature);

    Some(CircleMarker {
        id: feature.id.clone(),
        lat,
        lng,
        radius: marker_size(magnitude),
        style: marker_style(magnitude),
        popup: event_popup(feature),
    })
}

/// Build the event overlay from a feed document, preserving feed order.
pub fn build_overlay(collection: &FeatureCollection) -> Overlay {
    let mut markers = Vec::with_capacity(collection.len());
    let mut skipped: usize = 0;

    for feature in &collection.features {
        if let Some(marker) = to_marker(feature) {
            markers.push(marker);
        } else {
            skipped = skipped.saturating_add(1);
            debug!(
                id = feature.id.as_deref().unwrap_or("<none>"),
                "feature has no point geometry, skipping"
            );
        }
    }

    debug!(markers = markers.len(), skipped, "overlay built");

    Overlay {
        name: OVERLAY_NAME.to_owned(),
        markers,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use quakemap_types::{EventProperties, Geometry, MagnitudeColor};

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_feed() -> FeatureCollection {
        FeatureCollection::new(vec![
            Feature::point(2.1, "12km SSW of Volcano, Hawaii", 1_700_000_000_000, -155.28, 19.3),
            Feature::point(6.0, "Off the coast of Chile", 1_700_000_100_000, -72.1, -33.4),
        ])
    }

    #[test]
    fn two_feature_feed_yields_two_markers() {
        let overlay = build_overlay(&sample_feed());

        assert_eq!(overlay.name, OVERLAY_NAME);
        assert_eq!(overlay.markers.len(), 2);
        assert_eq!(overlay.skipped, 0);

        let radii: Vec<f64> = overlay.markers.iter().map(|m| m.radius).collect();
        assert!(approx(radii.first().copied().unwrap_or_default(), 10.5));
        assert!(approx(radii.get(1).copied().unwrap_or_default(), 30.0));

        let colors: Vec<MagnitudeColor> =
            overlay.markers.iter().map(|m| m.style.fill_color).collect();
        assert_eq!(colors, vec![MagnitudeColor::Gold, MagnitudeColor::Crimson]);
    }

    #[test]
    fn marker_carries_position_and_fixed_stroke() {
        let feature = Feature::point(3.4, "Somewhere", 0, 10.0, 20.0);
        let marker = to_marker(&feature);
        assert!(marker.is_some());
        let Some(marker) = marker else { return };

        assert!(approx(marker.lat, 20.0));
        assert!(approx(marker.lng, 10.0));
        assert_eq!(marker.style.color, "white");
        assert!(approx(marker.style.weight, 0.5));
        assert!(approx(marker.style.opacity, 0.5));
        assert!(approx(marker.style.fill_opacity, 0.8));
        assert_eq!(marker.style.fill_color, MagnitudeColor::Orange);
    }

    #[test]
    fn popup_has_place_and_utc_time() {
        let feature = Feature::point(4.2, "Near Tokyo", 1_700_000_000_000, 139.7, 35.7);
        let popup = event_popup(&feature);

        assert!(approx(popup.magnitude, 4.2));
        assert_eq!(popup.place, "Near Tokyo");
        assert_eq!(
            popup.time.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn missing_magnitude_and_place_default() {
        let feature = Feature {
            id: Some("nc1".to_owned()),
            properties: EventProperties::default(),
            geometry: Some(Geometry::Point {
                coordinates: vec![-122.0, 37.0, 5.0],
            }),
        };
        let marker = to_marker(&feature);
        assert!(marker.is_some());
        let Some(marker) = marker else { return };

        assert!(approx(marker.radius, 0.0));
        assert_eq!(marker.style.fill_color, MagnitudeColor::GreenYellow);
        assert_eq!(marker.popup.place, "");
        assert_eq!(marker.popup.time, None);
        assert_eq!(marker.id.as_deref(), Some("nc1"));
    }

    #[test]
    fn negative_magnitude_is_not_guarded() {
        let feature = Feature::point(-0.4, "Quarry", 0, 0.0, 0.0);
        let marker = to_marker(&feature);
        assert!(marker.is_some_and(|m| m.radius < 0.0));
    }

    #[test]
    fn non_point_features_are_skipped() {
        let mut feed = sample_feed();
        feed.features.push(Feature {
            id: None,
            properties: EventProperties::default(),
            geometry: None,
        });
        feed.features.push(Feature {
            id: None,
            properties: EventProperties::default(),
            geometry: Some(Geometry::Other),
        });

        let overlay = build_overlay(&feed);
        assert_eq!(overlay.markers.len(), 2);
        assert_eq!(overlay.skipped, 2);
    }

    #[test]
    fn empty_feed_gives_empty_overlay() {
        let overlay = build_overlay(&FeatureCollection::default());
        assert!(overlay.markers.is_empty());
        assert_eq!(overlay.skipped, 0);
    }
}
