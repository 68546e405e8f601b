use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::catalog::{Catalog, ChannelPlaylist};
use crate::telemetry::{self};
use crate::telemetry::ops::songs::Phase as SongsPhase;

/// bensound songs [--channel NAME] [--by-channel]
#[derive(Args, Debug)]
pub struct SongsCmd {
    /// Crawl only this channel
    #[arg(long)]
    pub channel: Option<String>,
    /// Group the whole catalog by channel
    #[arg(long, default_value_t = false, conflicts_with = "channel")]
    pub by_channel: bool,
}

#[derive(Serialize)]
struct IndexedTitle<'a> { index: usize, title: &'a str }

pub async fn run(catalog: &mut Catalog, args: SongsCmd) -> Result<()> {
    let log = telemetry::songs();
    let _g = log.root_span_kv([
        ("channel", format!("{:?}", args.channel)),
        ("by_channel", args.by_channel.to_string()),
    ]).entered();

    if let Some(name) = args.channel {
        let songs = { let _s = log.span(&SongsPhase::Crawl).entered(); catalog.extract_channel_music(&name).await? };
        let _s = log.span(&SongsPhase::Output).entered();
        if songs.is_empty() { log.info(format!("ℹ️  No songs available for channel {name}")); }
        let playlist = ChannelPlaylist { channel: name, titles: songs.into_iter().map(|s| s.title).collect() };
        log.result(&playlist)?;
        return Ok(());
    }

    { let _s = log.span(&SongsPhase::Crawl).entered(); catalog.refresh().await?; }
    let _s = log.span(&SongsPhase::Output).entered();
    if catalog.songs().is_empty() {
        log.info("ℹ️  No songs available");
        return Ok(());
    }
    if args.by_channel {
        log.result(&catalog.playlists())?;
    } else {
        let listing: Vec<IndexedTitle> = catalog
            .song_titles()
            .into_iter()
            .enumerate()
            .map(|(index, title)| IndexedTitle { index, title })
            .collect();
        log.result(&listing)?;
    }
    Ok(())
}
