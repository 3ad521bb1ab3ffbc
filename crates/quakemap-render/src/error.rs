//! Error types for page rendering.

/// Errors that can occur while rendering the map page or a popup.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A template could not be loaded, compiled, or rendered.
    #[error("template render error: {0}")]
    Template(String),
}
