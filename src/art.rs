use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::select::SongSelect;
use crate::telemetry::{self};
use crate::telemetry::ops::art::Phase as ArtPhase;

/// bensound art --index N | --title T [--out FILE]
#[derive(Args, Debug)]
pub struct ArtCmd {
    #[command(flatten)]
    pub select: SongSelect,
    /// Save the decoded artwork; format follows the extension (.png, .jpg)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Serialize)]
struct ArtInfo {
    title: String,
    url_image: String,
    width: u32,
    height: u32,
    color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<PathBuf>,
}

pub async fn run(catalog: &mut Catalog, args: ArtCmd) -> Result<()> {
    let log = telemetry::art();
    let _g = log.root_span_kv([
        ("select", args.select.describe()),
        ("out", format!("{:?}", args.out)),
    ]).entered();

    { let _s = log.span(&ArtPhase::Refresh).entered(); catalog.refresh().await?; }
    let song = { let _s = log.span(&ArtPhase::Select).entered(); args.select.resolve(catalog)? };

    let img = {
        let _s = log.span_kv(&ArtPhase::Fetch, [("url", song.url_image.clone())]).entered();
        song.art(catalog.fetcher()).await?
    };

    if let Some(path) = &args.out {
        let _s = log.span(&ArtPhase::Save).entered();
        img.save(path).with_context(|| format!("save artwork to {}", path.display()))?;
        log.info(format!("🖼️  Saved {}", path.display()));
    }

    let _s = log.span(&ArtPhase::Output).entered();
    let info = ArtInfo {
        title: song.title.clone(),
        url_image: song.url_image.clone(),
        width: img.width(),
        height: img.height(),
        color: format!("{:?}", img.color()),
        saved: args.out,
    };
    log.result(&info)?;
    Ok(())
}
