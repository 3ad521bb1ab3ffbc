//! Command implementations.
//!
//! Each command is one linear pass: read the feed, transform, then write,
//! print, or serve. A feed failure ends `render` and `summary` with an
//! error; `serve` reports it per request instead.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use quakemap_core::config::{FeedConfig, QuakemapConfig};
use quakemap_core::{build_overlay, compose_map, summarize};
use quakemap_feed::FeedSource;
use quakemap_render::PageRenderer;
use quakemap_server::{start_server, AppState, ServerConfig};
use quakemap_types::FeedSummary;
use tracing::info;

use crate::cli::{FeedArgs, PageArgs};
use crate::error::CliError;

/// Pick the feed source from flags, falling back to the configured URL.
pub fn feed_source(args: &FeedArgs, config: &FeedConfig) -> FeedSource {
    if let Some(path) = &args.feed_file {
        return FeedSource::file(path.clone());
    }
    let url = args.feed_url.as_deref().unwrap_or(&config.url);
    FeedSource::http(url, Duration::from_millis(config.timeout_ms))
}

/// Build the page renderer from flags.
pub fn page_renderer(args: &PageArgs) -> Result<PageRenderer, CliError> {
    let renderer = match &args.templates {
        Some(dir) => PageRenderer::with_overrides(dir)?,
        None => PageRenderer::new()?,
    };
    Ok(match &args.title {
        Some(title) => renderer.with_title(title),
        None => renderer,
    })
}

/// `quakemap render`: fetch once and write the page to `output`.
pub async fn render(
    config: &QuakemapConfig,
    output: &Path,
    feed: &FeedArgs,
    page: &PageArgs,
) -> Result<(), CliError> {
    let renderer = page_renderer(page)?;
    let collection = feed_source(feed, &config.feed).fetch().await?;

    let overlay = build_overlay(&collection);
    let markers = overlay.markers.len();
    let view = compose_map(overlay, &config.map, &config.map.access_token);
    let html = renderer.render_page(&view, None)?;

    tokio::fs::write(output, html.as_bytes())
        .await
        .map_err(|source| CliError::Output {
            path: output.display().to_string(),
            source,
        })?;

    info!(path = %output.display(), markers, "map page written");
    Ok(())
}

/// `quakemap summary`: fetch once and print per-band counts.
pub async fn summary(config: &QuakemapConfig, json: bool, feed: &FeedArgs) -> Result<(), CliError> {
    let collection = feed_source(feed, &config.feed).fetch().await?;
    let summary = summarize(&build_overlay(&collection));

    let text = if json {
        serde_json::to_string_pretty(&summary)?
    } else {
        format_summary(&summary)
    };
    println!("{text}");
    Ok(())
}

/// `quakemap serve`: run the HTTP server until `Ctrl-C`.
pub async fn serve(
    config: &QuakemapConfig,
    host: Option<String>,
    port: Option<u16>,
    feed: &FeedArgs,
    page: &PageArgs,
) -> Result<(), CliError> {
    let server_config = ServerConfig {
        host: host.unwrap_or_else(|| config.server.host.clone()),
        port: port.unwrap_or(config.server.port),
    };

    let source = feed_source(feed, &config.feed);
    info!(source = source.name(), "feed source configured");

    let state = Arc::new(AppState::new(
        source,
        config.map.clone(),
        config.map.access_token.clone(),
        page_renderer(page)?,
    ));

    start_server(&server_config, state).await?;
    Ok(())
}

/// Plain-text table of a summary.
pub fn format_summary(summary: &FeedSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<12} {:>6}", "band", "color", "count");
    for band in &summary.bands {
        let _ = writeln!(out, "{:<8} {:<12} {:>6}", band.label, band.color, band.count);
    }
    let _ = writeln!(out, "markers: {}", summary.markers);
    let _ = writeln!(out, "skipped: {}", summary.skipped);
    match (summary.min_magnitude, summary.max_magnitude) {
        (Some(min), Some(max)) => {
            let _ = write!(out, "magnitude range: {min} .. {max}");
        }
        _ => {
            let _ = write!(out, "magnitude range: n/a");
        }
    }
    out
}
