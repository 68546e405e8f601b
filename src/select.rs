use anyhow::{Result, anyhow};
use clap::Args;

use crate::catalog::{Catalog, Song};

/// Pick one song from the refreshed catalog.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SongSelect {
    /// Position in the song list (see `bensound songs`)
    #[arg(long)]
    pub index: Option<usize>,
    /// Exact, case-sensitive title
    #[arg(long)]
    pub title: Option<String>,
}

impl SongSelect {
    pub fn describe(&self) -> String {
        match (&self.index, &self.title) {
            (Some(i), _) => format!("index={i}"),
            (None, Some(t)) => format!("title={t:?}"),
            (None, None) => "none".to_string(),
        }
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<&'a Song> {
        match (&self.index, &self.title) {
            (Some(i), _) => catalog
                .song_by_index(*i)
                .ok_or_else(|| anyhow!("bad song index {i}: catalog has {} songs", catalog.songs().len())),
            (None, Some(t)) => catalog
                .song_by_title(t)
                .ok_or_else(|| anyhow!("no song titled {t:?}")),
            (None, None) => Err(anyhow!("select a song with --index or --title")),
        }
    }
}
