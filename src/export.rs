use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::telemetry::{self};
use crate::telemetry::ops::export::Phase as ExportPhase;

/// bensound export --out FILE [--apply]
#[derive(Args, Debug)]
pub struct ExportCmd {
    /// JSON file receiving one object per song
    #[arg(long)]
    pub out: PathBuf,
    #[arg(long, default_value_t = false)]
    pub apply: bool,
    /// Number of titles to list in the plan
    #[arg(long, default_value_t = 10)]
    pub plan_limit: usize,
}

#[derive(Serialize)]
struct ExportPlan { out: PathBuf, channels: usize, songs: usize, sample_titles: Vec<String> }

#[derive(Serialize)]
struct ExportResult { out: PathBuf, songs: usize }

pub async fn run(catalog: &mut Catalog, args: ExportCmd) -> Result<()> {
    let log = telemetry::export();
    let _g = log.root_span_kv([
        ("mode", if args.apply { "apply".to_string() } else { "plan".to_string() }),
        ("out", args.out.display().to_string()),
    ]).entered();

    let summary = { let _s = log.span(&ExportPhase::Refresh).entered(); catalog.refresh().await? };

    if !args.apply {
        let _s = log.span(&ExportPhase::Plan).entered();
        let plan = ExportPlan {
            out: args.out.clone(),
            channels: summary.channels,
            songs: summary.songs,
            sample_titles: catalog.song_titles().into_iter().take(args.plan_limit).map(str::to_string).collect(),
        };
        log.plan(&plan)?;
        log.info("   Use --apply to execute.");
        return Ok(());
    }

    let _s = log.span(&ExportPhase::Write).entered();
    let rows: Vec<Value> = catalog.songs().iter().map(|s| s.properties()).collect::<Result<_, _>>()?;
    let json = serde_json::to_vec_pretty(&rows)?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.with_context(|| format!("create {}", parent.display()))?;
    }
    tokio::fs::write(&args.out, json).await.with_context(|| format!("write {}", args.out.display()))?;
    log.info(format!("💾 Exported {} songs", rows.len()));
    log.result(&ExportResult { out: args.out, songs: rows.len() })?;
    Ok(())
}
