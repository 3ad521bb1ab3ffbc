//! Configuration loading and typed config structures for Quakemap.
//!
//! Configuration lives in a YAML file (`quakemap.yaml` by default). Every
//! field has a default, so an empty file or no file at all yields a working
//! setup pointed at the USGS weekly feed. A few values can be overridden
//! from the environment after parsing:
//!
//! - `QUAKEMAP_FEED_URL` overrides `feed.url`
//! - `MAPBOX_ACCESS_TOKEN` overrides `map.access_token`
//! - `QUAKEMAP_HOST` overrides `server.host`
//! - `QUAKEMAP_PORT` overrides `server.port`

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuakemapConfig {
    /// Where the event feed is read from.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Map layout and imagery provider settings.
    #[serde(default)]
    pub map: MapConfig,

    /// HTTP server bind settings for `quakemap serve`.
    #[serde(default)]
    pub server: ServeConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuakemapConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string and apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_without_env(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_without_env(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides from process environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("QUAKEMAP_FEED_URL") {
            self.feed.url = val;
        }
        if let Some(val) = lookup("MAPBOX_ACCESS_TOKEN") {
            self.map.access_token = val;
        }
        if let Some(val) = lookup("QUAKEMAP_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("QUAKEMAP_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = val, error = %e, "ignoring invalid QUAKEMAP_PORT"),
            }
        }
    }
}

/// Event feed settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// GeoJSON feed URL.
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_feed_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_ms: default_feed_timeout_ms(),
        }
    }
}

/// One selectable base imagery layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BaseLayerConfig {
    /// Display name in the layer control.
    pub name: String,
    /// Provider style identifier (e.g. `mapbox.streets`).
    pub style_id: String,
}

/// Map layout and imagery settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// DOM element id the map mounts into.
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Initial center latitude.
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Initial center longitude.
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Tile URL template.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Attribution HTML for the imagery.
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Maximum zoom served by the provider.
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,

    /// Base layers in display order. The first is shown on load.
    #[serde(default = "default_base_layers")]
    pub base_layers: Vec<BaseLayerConfig>,

    /// Imagery provider credential. Usually supplied through
    /// `MAPBOX_ACCESS_TOKEN` rather than the file.
    #[serde(default)]
    pub access_token: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
            base_layers: default_base_layers(),
            access_token: String::new(),
        }
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServeConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_feed_url() -> String {
    String::from("https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson")
}

const fn default_feed_timeout_ms() -> u64 {
    10_000
}

fn default_container_id() -> String {
    String::from("map")
}

const fn default_center_lat() -> f64 {
    37.09
}

const fn default_center_lng() -> f64 {
    -95.71
}

const fn default_zoom() -> u8 {
    5
}

fn default_tile_url() -> String {
    String::from("https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}")
}

fn default_attribution() -> String {
    String::from(
        "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
         <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
         Imagery \u{a9} <a href=\"https://www.mapbox.com/\">Mapbox</a>",
    )
}

const fn default_max_zoom() -> u8 {
    18
}

fn default_base_layers() -> Vec<BaseLayerConfig> {
    vec![
        BaseLayerConfig {
            name: String::from("Street Map"),
            style_id: String::from("mapbox.streets"),
        },
        BaseLayerConfig {
            name: String::from("Dark Map"),
            style_id: String::from("mapbox.dark"),
        },
    ]
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    String::from("info")
}
