//! Page and popup rendering via `minijinja`.
//!
//! The templates ship inside the binary. An operator may point the renderer
//! at a directory containing `map.html` and/or `popup.html` to replace them
//! without recompiling; any file not present falls back to the built-in.
//! Both names end in `.html`, so `minijinja` escapes every interpolated
//! value.

use std::path::Path;

use chrono::{DateTime, Utc};
use minijinja::{context, Environment};
use quakemap_types::{CircleMarker, EventPopup, MapView};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::RenderError;

/// Template name of the full page.
pub const PAGE_TEMPLATE: &str = "map.html";

/// Template name of a marker popup.
pub const POPUP_TEMPLATE: &str = "popup.html";

const BUILTIN_PAGE: &str = include_str!("../templates/map.html");
const BUILTIN_POPUP: &str = include_str!("../templates/popup.html");

/// Title used when none is supplied.
pub const DEFAULT_TITLE: &str = "Earthquakes";

/// A marker with its popup pre-rendered to HTML.
#[derive(Debug, Serialize)]
struct RenderedMarker<'a> {
    #[serde(flatten)]
    marker: &'a CircleMarker,
    popup_html: String,
}

/// Renders map pages and marker popups.
pub struct PageRenderer {
    env: Environment<'static>,
    title: String,
}

impl PageRenderer {
    /// Create a renderer using the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a built-in template fails to
    /// compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        add_template(&mut env, PAGE_TEMPLATE, BUILTIN_PAGE.to_owned())?;
        add_template(&mut env, POPUP_TEMPLATE, BUILTIN_POPUP.to_owned())?;
        Ok(Self {
            env,
            title: DEFAULT_TITLE.to_owned(),
        })
    }

    /// Create a renderer whose templates may be overridden from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if an override cannot be read or
    /// does not compile.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        let mut renderer = Self::new()?;
        for name in [PAGE_TEMPLATE, POPUP_TEMPLATE] {
            let path = dir.join(name);
            if !path.exists() {
                continue;
            }
            let source = std::fs::read_to_string(&path).map_err(|e| {
                RenderError::Template(format!("failed to read {}: {e}", path.display()))
            })?;
            add_template(&mut renderer.env, name, source)?;
            info!(template = name, path = %path.display(), "template override loaded");
        }
        Ok(renderer)
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.title);
        self
    }

    /// Render one popup to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if rendering fails.
    pub fn render_popup(&self, popup: &EventPopup) -> Result<String, RenderError> {
        self.env
            .get_template(POPUP_TEMPLATE)
            .map_err(|e| RenderError::Template(format!("missing popup template: {e}")))?
            .render(context! {
                magnitude => format_magnitude(popup.magnitude),
                place => popup.place,
                time => format_time(popup.time),
            })
            .map_err(|e| RenderError::Template(format!("popup render failed: {e}")))
    }

    /// Render the full map page.
    ///
    /// `notice`, when present, is shown as a banner above the map; it is
    /// used to report a feed that could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if any popup or the page fails to
    /// render.
    pub fn render_page(&self, view: &MapView, notice: Option<&str>) -> Result<String, RenderError> {
        let markers = view
            .overlay
            .markers
            .iter()
            .map(|marker| {
                Ok(RenderedMarker {
                    marker,
                    popup_html: self.render_popup(&marker.popup)?,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        let html = self
            .env
            .get_template(PAGE_TEMPLATE)
            .map_err(|e| RenderError::Template(format!("missing page template: {e}")))?
            .render(context! {
                title => self.title,
                view => view,
                markers => markers,
                notice => notice,
            })
            .map_err(|e| RenderError::Template(format!("page render failed: {e}")))?;

        debug!(markers = markers.len(), bytes = html.len(), "page rendered");
        Ok(html)
    }
}

fn add_template(
    env: &mut Environment<'static>,
    name: &'static str,
    source: String,
) -> Result<(), RenderError> {
    env.add_template_owned(name, source)
        .map_err(|e| RenderError::Template(format!("failed to add {name} template: {e}")))
}

/// Shortest decimal form of a magnitude (`6` rather than `6.0`).
pub fn format_magnitude(magnitude: f64) -> String {
    format!("{magnitude}")
}

/// Human-readable UTC origin time.
pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(
        || String::from("Unknown time"),
        |t| t.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use quakemap_core::config::MapConfig;
    use quakemap_core::{build_overlay, compose_map};
    use quakemap_types::{Feature, FeatureCollection, Overlay};

    use super::*;

    fn renderer() -> Option<PageRenderer> {
        let renderer = PageRenderer::new();
        assert!(renderer.is_ok(), "built-in templates should compile");
        renderer.ok()
    }

    fn sample_view() -> MapView {
        let overlay = build_overlay(&FeatureCollection::new(vec![
            Feature::point(2.1, "5km NE of Ridgecrest, CA", 1_700_000_000_000, -117.6, 35.7),
            Feature::point(6.0, "Off the coast of Chile", 1_700_000_100_000, -72.1, -33.4),
        ]));
        compose_map(overlay, &MapConfig::default(), "pk.test-token")
    }

    #[test]
    fn popup_layout() {
        let Some(renderer) = renderer() else { return };
        let popup = EventPopup {
            magnitude: 6.0,
            place: "Off the coast of Chile".to_owned(),
            time: DateTime::<Utc>::from_timestamp_millis(0),
        };
        let html = renderer.render_popup(&popup).unwrap_or_default();
        assert_eq!(
            html,
            "<h1>6</h1><hr><h3>Off the coast of Chile</h3><hr><p>Thu Jan 01 1970 00:00:00 UTC</p>"
        );
    }

    #[test]
    fn popup_escapes_place() {
        let Some(renderer) = renderer() else { return };
        let popup = EventPopup {
            magnitude: 1.5,
            place: "<script>alert(1)</script>".to_owned(),
            time: None,
        };
        let html = renderer.render_popup(&popup).unwrap_or_default();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Unknown time"));
    }

    #[test]
    fn page_contains_layers_markers_and_legend() {
        let Some(renderer) = renderer() else { return };
        let html = renderer.render_page(&sample_view(), None).unwrap_or_default();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div id=\"map\">"));
        assert!(html.contains("Street Map"));
        assert!(html.contains("Dark Map"));
        assert!(html.contains("mapbox.streets"));
        assert!(html.contains("pk.test-token"));
        assert!(html.contains("Earthquakes"));
        assert!(html.contains("\"fill_color\":\"gold\""));
        assert!(html.contains("\"fill_color\":\"crimson\""));
        assert!(html.contains("\"position\":\"bottomright\""));
        assert!(html.contains("greenyellow"));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn page_shows_notice() {
        let Some(renderer) = renderer() else { return };
        let view = compose_map(Overlay::empty("Earthquakes"), &MapConfig::default(), "t");
        let html = renderer
            .render_page(&view, Some("feed unavailable"))
            .unwrap_or_default();
        assert!(html.contains("class=\"notice\""));
        assert!(html.contains("feed unavailable"));
    }

    #[test]
    fn embedded_json_cannot_close_script() {
        let Some(renderer) = renderer() else { return };
        let overlay = build_overlay(&FeatureCollection::new(vec![Feature::point(
            3.0,
            "</script><b>x</b>",
            0,
            0.0,
            0.0,
        )]));
        let view = compose_map(overlay, &MapConfig::default(), "t");
        let html = renderer.render_page(&view, None).unwrap_or_default();
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn custom_title() {
        let Some(renderer) = renderer() else { return };
        let renderer = renderer.with_title("Past Week");
        let html = renderer.render_page(&sample_view(), None).unwrap_or_default();
        assert!(html.contains("<title>Past Week</title>"));
    }

    #[test]
    fn overrides_replace_builtin_popup() {
        let dir = std::env::temp_dir().join(format!(
            "quakemap_templates_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::create_dir_all(&dir).ok();
        std::fs::write(dir.join(POPUP_TEMPLATE), "M{{ magnitude }} @ {{ place }}").ok();

        let renderer = PageRenderer::with_overrides(&dir);
        assert!(renderer.is_ok());
        if let Ok(renderer) = renderer {
            let popup = EventPopup {
                magnitude: 4.5,
                place: "Here".to_owned(),
                time: None,
            };
            assert_eq!(renderer.render_popup(&popup).unwrap_or_default(), "M4.5 @ Here");
            // Page template was not overridden.
            let page = renderer.render_page(&sample_view(), None).unwrap_or_default();
            assert!(page.contains("L.control.layers"));
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn broken_override_is_an_error() {
        let dir = std::env::temp_dir().join(format!(
            "quakemap_bad_templates_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::create_dir_all(&dir).ok();
        std::fs::write(dir.join(PAGE_TEMPLATE), "{% if %}").ok();

        let renderer = PageRenderer::with_overrides(&dir);
        assert!(matches!(renderer, Err(RenderError::Template(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn magnitude_formatting() {
        assert_eq!(format_magnitude(6.0), "6");
        assert_eq!(format_magnitude(2.1), "2.1");
        assert_eq!(format_magnitude(-0.5), "-0.5");
    }
}
