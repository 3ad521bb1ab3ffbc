//! GeoJSON feed document types.
//!
//! Mirrors the USGS earthquake summary feed: a `FeatureCollection` whose
//! features carry `mag`, `place`, and `time` properties and a `Point`
//! geometry. Only the fields the map needs are modelled; everything else in
//! the document is ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// A GeoJSON `FeatureCollection` as returned by the event feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Feed-level metadata (title, generation time, count).
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    /// Event features in feed order.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a collection from a list of features with no metadata.
    pub const fn new(features: Vec<Feature>) -> Self {
        Self {
            metadata: None,
            features,
        }
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Feed metadata block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMetadata {
    /// Generation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub generated: Option<i64>,
    /// Human-readable feed title.
    #[serde(default)]
    pub title: Option<String>,
    /// Number of features the feed claims to contain.
    #[serde(default)]
    pub count: Option<u64>,
}

/// One earthquake event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feed-assigned event identifier. Numeric ids are kept in their
    /// decimal form.
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: Option<String>,
    /// Descriptive properties. `null` or missing yields empty properties.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: EventProperties,
    /// Event location. `null` in the feed deserializes to `None`.
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Build a point feature. Used by tests and static feeds.
    pub fn point(magnitude: f64, place: &str, time: i64, lng: f64, lat: f64) -> Self {
        Self {
            id: None,
            properties: EventProperties {
                mag: Some(magnitude),
                place: Some(place.to_owned()),
                time: Some(time),
            },
            geometry: Some(Geometry::Point {
                coordinates: vec![lng, lat],
            }),
        }
    }

    /// The event's `(latitude, longitude)` if its geometry is a point with
    /// at least two coordinates.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.geometry.as_ref()? {
            Geometry::Point { coordinates } => {
                let lng = *coordinates.first()?;
                let lat = *coordinates.get(1)?;
                Some((lat, lng))
            }
            Geometry::Other => None,
        }
    }
}

/// A GeoJSON feature id, which may be a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl FeatureId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Signed(n) => n.to_string(),
            Self::Unsigned(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FeatureId>::deserialize(deserializer)?.map(FeatureId::into_string))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Event properties used by the map. Other feed properties are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventProperties {
    /// Event magnitude. The feed reports `null` for some events.
    #[serde(default)]
    pub mag: Option<f64>,
    /// Textual description of the event location.
    #[serde(default)]
    pub place: Option<String>,
    /// Origin time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
}

/// GeoJSON geometry. Only points are rendered; any other geometry type
/// deserializes to [`Geometry::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A single position: `[longitude, latitude]` plus optional depth.
    Point {
        /// Position coordinates.
        coordinates: Vec<f64>,
    },
    /// Any non-point geometry.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000, "title": "USGS All Earthquakes, Past Week", "count": 3, "status": 200},
        "features": [
            {
                "type": "Feature",
                "id": "ci40000001",
                "properties": {"mag": 2.1, "place": "5km NE of Ridgecrest, CA", "time": 1699999000000, "tsunami": 0},
                "geometry": {"type": "Point", "coordinates": [-117.6, 35.7, 8.2]}
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": null, "time": 1699998000000},
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.0},
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}
            }
        ],
        "bbox": [-180.0, -90.0, 0.0, 180.0, 90.0, 700.0]
    }"#;

    #[test]
    fn parses_usgs_shaped_document() {
        let parsed: Result<FeatureCollection, _> = serde_json::from_str(SAMPLE);
        assert!(parsed.is_ok(), "sample should parse: {parsed:?}");
        let Ok(collection) = parsed else { return };

        assert_eq!(collection.len(), 3);
        assert_eq!(
            collection.metadata.as_ref().and_then(|m| m.count),
            Some(3)
        );

        let first = collection.features.first();
        assert_eq!(first.and_then(|f| f.id.as_deref()), Some("ci40000001"));
        assert_eq!(first.and_then(Feature::lat_lng), Some((35.7, -117.6)));
    }

    #[test]
    fn null_fields_and_missing_geometry() {
        let Ok(collection) = serde_json::from_str::<FeatureCollection>(SAMPLE) else {
            return;
        };
        let second = collection.features.get(1);
        assert!(second.is_some());
        let Some(second) = second else { return };

        assert_eq!(second.properties.mag, None);
        assert_eq!(second.properties.place, None);
        assert_eq!(second.geometry, None);
        assert_eq!(second.lat_lng(), None);
    }

    #[test]
    fn non_point_geometry_is_other() {
        let Ok(collection) = serde_json::from_str::<FeatureCollection>(SAMPLE) else {
            return;
        };
        let third = collection.features.get(2);
        assert_eq!(third.and_then(|f| f.geometry.clone()), Some(Geometry::Other));
        assert_eq!(third.and_then(Feature::lat_lng), None);
    }

    #[test]
    fn point_with_one_coordinate_has_no_location() {
        let feature = Feature {
            id: None,
            properties: EventProperties::default(),
            geometry: Some(Geometry::Point {
                coordinates: vec![12.0],
            }),
        };
        assert_eq!(feature.lat_lng(), None);
    }

    #[test]
    fn numeric_ids_are_kept_as_text() {
        let doc = r#"{"features": [
            {"type": "Feature", "id": 42, "properties": {"mag": 1.5},
             "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}},
            {"type": "Feature", "id": -7, "properties": {},
             "geometry": {"type": "Point", "coordinates": [11.0, 21.0]}},
            {"type": "Feature", "id": null, "properties": {},
             "geometry": null}
        ]}"#;
        let parsed = serde_json::from_str::<FeatureCollection>(doc);
        assert!(parsed.is_ok(), "numeric ids should parse: {parsed:?}");
        let Ok(collection) = parsed else { return };

        let ids: Vec<Option<&str>> = collection
            .features
            .iter()
            .map(|f| f.id.as_deref())
            .collect();
        assert_eq!(ids, vec![Some("42"), Some("-7"), None]);
    }

    #[test]
    fn null_properties_keep_the_rest_of_the_feed() {
        let doc = r#"{"features": [
            {"type": "Feature", "id": "ok1", "properties": {"mag": 3.2, "place": "Somewhere"},
             "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}},
            {"type": "Feature", "id": "bare", "properties": null,
             "geometry": {"type": "Point", "coordinates": [11.0, 21.0]}},
            {"type": "Feature", "id": "absent",
             "geometry": {"type": "Point", "coordinates": [12.0, 22.0]}}
        ]}"#;
        let parsed = serde_json::from_str::<FeatureCollection>(doc);
        assert!(parsed.is_ok(), "null properties should parse: {parsed:?}");
        let Ok(collection) = parsed else { return };

        assert_eq!(collection.len(), 3);
        assert_eq!(
            collection.features.first().and_then(|f| f.properties.place.as_deref()),
            Some("Somewhere")
        );
        for feature in collection.features.iter().skip(1) {
            assert_eq!(feature.properties, EventProperties::default());
            assert!(feature.lat_lng().is_some());
        }
    }

    #[test]
    fn empty_document_defaults() {
        let parsed = serde_json::from_str::<FeatureCollection>("{}");
        assert!(parsed.is_ok());
        assert!(parsed.map(|c| c.is_empty()).unwrap_or(false));
    }
}
