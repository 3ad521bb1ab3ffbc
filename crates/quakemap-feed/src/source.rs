//! Feed sources.
//!
//! Uses enum dispatch rather than a trait object because the fetch is
//! async. The live map reads over HTTP; the file and static variants serve
//! offline rendering and tests.

use std::path::PathBuf;
use std::time::Duration;

use quakemap_types::FeatureCollection;
use tracing::{debug, info};

use crate::error::FeedError;

/// Longest error body kept in [`FeedError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Where a feature collection is read from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// GET a GeoJSON document over HTTP.
    Http(HttpFeed),
    /// Read a GeoJSON document from disk.
    File(FileFeed),
    /// Return a collection held in memory.
    Static(FeatureCollection),
}

impl FeedSource {
    /// HTTP source for `url` with a per-request timeout.
    pub fn http(url: &str, timeout: Duration) -> Self {
        Self::Http(HttpFeed::new(url, timeout))
    }

    /// File source reading `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(FileFeed { path: path.into() })
    }

    /// Read the feed once.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] describing why the document could not be
    /// obtained or parsed.
    pub async fn fetch(&self) -> Result<FeatureCollection, FeedError> {
        let collection = match self {
            Self::Http(feed) => feed.fetch().await?,
            Self::File(feed) => feed.fetch().await?,
            Self::Static(collection) => collection.clone(),
        };
        info!(
            source = self.name(),
            features = collection.len(),
            "feed read"
        );
        Ok(collection)
    }

    /// Short label for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::File(_) => "file",
            Self::Static(_) => "static",
        }
    }
}

/// HTTP feed reader.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpFeed {
    /// Create a reader for `url`.
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_owned(),
            timeout,
        }
    }

    /// The feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<FeatureCollection, FeedError> {
        debug!(url = self.url, timeout_ms = self.timeout.as_millis(), "requesting feed");

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/geo+json, application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(FeedError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.request_error(&e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn request_error(&self, error: &reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout {
                url: self.url.clone(),
            }
        } else {
            FeedError::Transport {
                url: self.url.clone(),
                message: error.to_string(),
            }
        }
    }
}

/// Local file feed reader.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    async fn fetch(&self) -> Result<FeatureCollection, FeedError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FeedError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Cut `text` to at most `max` characters.
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
