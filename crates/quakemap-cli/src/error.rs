//! Error types for the command-line binary.
//!
//! Wraps the error of every crate the commands drive so `main` can report a
//! single failure and exit non-zero.

use quakemap_core::ConfigError;
use quakemap_feed::FeedError;
use quakemap_render::RenderError;
use quakemap_server::ServerError;

/// Errors that can end a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The event feed could not be read.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// The page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The server failed to start or stopped with an error.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// Writing output failed.
    #[error("failed to write {path}: {source}")]
    Output {
        /// Destination path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Serialization or deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
