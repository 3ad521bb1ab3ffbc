//! Event feed acquisition for Quakemap.
//!
//! A [`FeedSource`] reads one GeoJSON `FeatureCollection` per call to
//! [`FeedSource::fetch`]. There is no retry and no caching; a failed read is
//! returned to the caller as a [`FeedError`] to decide what to show.

pub mod error;
pub mod source;

pub use error::FeedError;
pub use source::{FeedSource, FileFeed, HttpFeed};
