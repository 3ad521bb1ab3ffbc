//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Config path used when neither `--config` nor `QUAKEMAP_CONFIG` is given.
/// A missing file at this path falls back to built-in defaults.
pub const DEFAULT_CONFIG_PATH: &str = "quakemap.yaml";

/// Render live earthquake events onto an interactive map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, global = true, env = "QUAKEMAP_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the feed once and write the map page to a file.
    Render {
        /// Output HTML file.
        #[arg(short, long, default_value = "quakemap.html")]
        output: PathBuf,

        #[command(flatten)]
        feed: FeedArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Fetch the feed once and print per-band counts.
    Summary {
        /// Print the summary as JSON instead of a table.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Serve the map and JSON API over HTTP.
    Serve {
        /// Bind address; overrides `server.host`.
        #[arg(long)]
        host: Option<String>,

        /// Listen port; overrides `server.port`.
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        feed: FeedArgs,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Feed selection shared by all commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FeedArgs {
    /// Read events from a local GeoJSON file instead of the configured URL.
    #[arg(long)]
    pub feed_file: Option<PathBuf>,

    /// Feed URL; overrides `feed.url`.
    #[arg(long, conflicts_with = "feed_file")]
    pub feed_url: Option<String>,
}

/// Page rendering options.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Directory with `map.html` / `popup.html` template overrides.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Page title.
    #[arg(long)]
    pub title: Option<String>,
}
