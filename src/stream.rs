use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use crate::catalog::Catalog;
use crate::select::SongSelect;
use crate::telemetry::{self};
use crate::telemetry::ops::stream::Phase as StreamPhase;

/// bensound stream --index N | --title T  (MP3 bytes on stdout, e.g. `| mpv -`)
#[derive(Args, Debug)]
pub struct StreamCmd {
    #[command(flatten)]
    pub select: SongSelect,
}

pub async fn run(catalog: &mut Catalog, args: StreamCmd) -> Result<()> {
    let log = telemetry::stream();
    let _g = log.root_span_kv([("select", args.select.describe())]).entered();

    { let _s = log.span(&StreamPhase::Refresh).entered(); catalog.refresh().await?; }
    let song = { let _s = log.span(&StreamPhase::Select).entered(); args.select.resolve(catalog)? };

    let mut cursor = {
        let _s = log.span_kv(&StreamPhase::Fetch, [("url", song.url_mp3.clone())]).entered();
        song.stream(catalog.fetcher()).await?
    };

    let _s = log.span(&StreamPhase::Write).entered();
    let mut out = io::stdout().lock();
    let written = io::copy(&mut cursor, &mut out).context("write mp3 to stdout")?;
    out.flush()?;
    log.info_kv("🎧 streamed", [("title", song.title.clone()), ("bytes", written.to_string())]);
    Ok(())
}
