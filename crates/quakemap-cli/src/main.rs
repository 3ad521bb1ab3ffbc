//! Command-line entry point for Quakemap.
//!
//! Fetches a live earthquake feed and renders every event as a circle
//! marker, sized and colored by magnitude, on a Leaflet map with a
//! base-layer switcher and a magnitude legend.
//!
//! # Pipeline
//!
//! ```text
//! Feed (HTTP/file) --> build_overlay --> compose_map --> PageRenderer --> HTML
//! ```
//!
//! # Commands
//!
//! - `render` -- write the map page to a file
//! - `summary` -- print per-band event counts
//! - `serve` -- serve the map and a JSON API over HTTP

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::Parser;
use quakemap_core::QuakemapConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, DEFAULT_CONFIG_PATH};
use crate::error::CliError;

/// Application entry point.
///
/// Loads configuration, initializes logging, and runs the selected command.
///
/// # Errors
///
/// Returns an error if configuration loading or the command fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config is read before logging so `logging.level` can seed the filter.
    let config = load_config(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        config = %cli.config.display(),
        feed_url = config.feed.url,
        feed_timeout_ms = config.feed.timeout_ms,
        "quakemap starting"
    );

    let result = match &cli.command {
        Command::Render { output, feed, page } => {
            commands::render(&config, output, feed, page).await
        }
        Command::Summary { json, feed } => commands::summary(&config, *json, feed).await,
        Command::Serve {
            host,
            port,
            feed,
            page,
        } => commands::serve(&config, host.clone(), *port, feed, page).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "command failed");
    }
    result?;
    Ok(())
}

/// Load the config file.
///
/// Only the default path may be absent, in which case built-in defaults
/// plus environment overrides are used. An explicitly named file that does
/// not exist is an error.
fn load_config(path: &Path) -> Result<QuakemapConfig, CliError> {
    if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        let mut config = QuakemapConfig::default();
        config.apply_env_overrides();
        return Ok(config);
    }
    Ok(QuakemapConfig::from_file(path)?)
}
