use anyhow::Result;
use clap::Args;

use crate::catalog::Catalog;
use crate::telemetry::{self};
use crate::telemetry::ops::channels::Phase as ChannelsPhase;

/// bensound channels
#[derive(Args, Debug)]
pub struct ChannelsCmd {}

pub async fn run(catalog: &mut Catalog, _args: ChannelsCmd) -> Result<()> {
    let log = telemetry::channels();
    let _g = log.root_span().entered();

    { let _s = log.span(&ChannelsPhase::Extract).entered(); catalog.extract_channels().await?; }
    let channels = catalog.channels();
    if channels.is_empty() {
        log.info("ℹ️  No channels available");
        return Ok(());
    }

    let _s = log.span(&ChannelsPhase::Output).entered();
    log.info(format!("📻 {} channels", channels.len()));
    log.result(&channels)?;
    Ok(())
}
