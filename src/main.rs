use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod art;
mod catalog;
mod channels;
mod config;
mod download;
mod export;
mod fetch;
mod output;
mod parse;
mod select;
mod show;
mod songs;
mod stream;
mod telemetry;

use catalog::Catalog;
use config::ScrapeConfig;
use fetch::HttpFetcher;

#[derive(Parser)]
#[command(name = "bensound", about = "Browse and download the bensound.com royalty-free catalog")]
struct Cli {
    /// Site root; overrides BENSOUND_BASE_URL
    #[arg(global = true, long)]
    base_url: Option<String>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List channels and their URLs
    Channels(channels::ChannelsCmd),
    /// List song titles, for one channel or the whole catalog
    Songs(songs::SongsCmd),
    /// Print every property of one song
    Show(show::ShowCmd),
    /// Write one song's MP3 to stdout
    Stream(stream::StreamCmd),
    /// Fetch and decode one song's artwork
    Art(art::ArtCmd),
    /// Download one song's MP3 (plan-only without --apply)
    Download(download::DownloadCmd),
    /// Write all song properties to a JSON file (plan-only without --apply)
    Export(export::ExportCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and BENSOUND_LOG_FORMAT
    telemetry::config::init_tracing();

    let mut cfg = ScrapeConfig::from_env()?;
    if let Some(base) = cli.base_url.as_deref() {
        cfg.set_base_url(base)?;
    }
    telemetry::config::set_site(cfg.base_url.as_str());
    let fetcher = HttpFetcher::new(&cfg).context("build http client")?;
    let mut catalog = Catalog::new(Arc::new(fetcher), cfg.base_url.clone());

    match cli.command {
        Commands::Channels(args) => channels::run(&mut catalog, args).await?,
        Commands::Songs(args) => songs::run(&mut catalog, args).await?,
        Commands::Show(args) => show::run(&mut catalog, args).await?,
        Commands::Stream(args) => stream::run(&mut catalog, args).await?,
        Commands::Art(args) => art::run(&mut catalog, args).await?,
        Commands::Download(args) => download::run(&mut catalog, args).await?,
        Commands::Export(args) => export::run(&mut catalog, args).await?,
    }

    Ok(())
}
