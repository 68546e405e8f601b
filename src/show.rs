use anyhow::Result;
use clap::Args;

use crate::catalog::Catalog;
use crate::select::SongSelect;
use crate::telemetry::{self};
use crate::telemetry::ops::show::Phase as ShowPhase;

/// bensound show --index N | --title T
#[derive(Args, Debug)]
pub struct ShowCmd {
    #[command(flatten)]
    pub select: SongSelect,
}

pub async fn run(catalog: &mut Catalog, args: ShowCmd) -> Result<()> {
    let log = telemetry::show();
    let _g = log.root_span_kv([("select", args.select.describe())]).entered();

    { let _s = log.span(&ShowPhase::Refresh).entered(); catalog.refresh().await?; }
    let song = { let _s = log.span(&ShowPhase::Select).entered(); args.select.resolve(catalog)? };

    let _s = log.span(&ShowPhase::Output).entered();
    log.result(&song.properties()?)?;
    Ok(())
}
