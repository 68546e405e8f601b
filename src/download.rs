use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::select::SongSelect;
use crate::telemetry::{self};
use crate::telemetry::ops::download::Phase as DownloadPhase;

/// bensound download --index N | --title T [--dest DIR] [--apply]
#[derive(Args, Debug)]
pub struct DownloadCmd {
    #[command(flatten)]
    pub select: SongSelect,
    /// Directory to save into (default: current directory)
    #[arg(long)]
    pub dest: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub apply: bool,
}

#[derive(Serialize)]
struct DownloadPlan { title: String, url_mp3: String, target: PathBuf, for_download: bool }

#[derive(Serialize)]
struct DownloadResult { title: String, path: PathBuf }

pub async fn run(catalog: &mut Catalog, args: DownloadCmd) -> Result<()> {
    let log = telemetry::download();
    let _g = log.root_span_kv([
        ("mode", if args.apply { "apply".to_string() } else { "plan".to_string() }),
        ("select", args.select.describe()),
        ("dest", format!("{:?}", args.dest)),
    ]).entered();

    { let _s = log.span(&DownloadPhase::Refresh).entered(); catalog.refresh().await?; }
    let song = { let _s = log.span(&DownloadPhase::Select).entered(); args.select.resolve(catalog)? };
    let target = song.mp3_target(args.dest.as_deref())?;

    if !song.for_download {
        log.warn_kv("⚠️  not free to download; the file carries voiceover markers", [("title", song.title.clone())]);
    }

    if !args.apply {
        let _s = log.span(&DownloadPhase::Plan).entered();
        let plan = DownloadPlan {
            title: song.title.clone(),
            url_mp3: song.url_mp3.clone(),
            target,
            for_download: song.for_download,
        };
        log.plan(&plan)?;
        log.info("   Use --apply to execute.");
        return Ok(());
    }

    let path = {
        let _s = log.span_kv(&DownloadPhase::Fetch, [("url", song.url_mp3.clone())]).entered();
        song.download_mp3(catalog.fetcher(), args.dest.as_deref()).await?
    };
    log.info_kv("⬇️  saved", [("title", song.title.clone()), ("path", path.display().to_string())]);
    log.result(&DownloadResult { title: song.title.clone(), path })?;
    Ok(())
}
