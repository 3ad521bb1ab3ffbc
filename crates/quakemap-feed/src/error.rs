//! Error types for feed acquisition.
//!
//! Each way a feed read can fail gets its own variant so callers can tell a
//! network problem from a bad document.

/// Errors that can occur while reading the event feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("feed request to {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("feed request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },

    /// The server answered with a non-success status.
    #[error("feed at {url} returned {status}: {body}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// A local feed file could not be read.
    #[error("failed to read feed file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document was not a valid GeoJSON feature collection.
    #[error("malformed feed document: {0}")]
    Malformed(#[from] serde_json::Error),
}
