use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use bytes::Bytes;
use image::DynamicImage;
use url::Url;

use super::song::Song;
use crate::fetch::{Fetch, FetchError};

impl Song {
    /// Whole MP3 in memory, seekable for a playback backend.
    pub async fn stream(&self, fetcher: &dyn Fetch) -> Result<Cursor<Bytes>, FetchError> {
        let bytes = fetcher.get_bytes(&self.url_mp3).await?;
        Ok(Cursor::new(bytes))
    }

    pub async fn art(&self, fetcher: &dyn Fetch) -> Result<DynamicImage> {
        let bytes = fetcher.get_bytes(&self.url_image).await?;
        image::load_from_memory(&bytes).with_context(|| format!("decode artwork {}", self.url_image))
    }

    /// Last path segment of the MP3 URL, percent-decoded.
    pub fn mp3_filename(&self) -> Option<String> {
        let url = Url::parse(&self.url_mp3).ok()?;
        let name = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
        let name = urlencoding::decode(name).ok()?;
        if name.is_empty() || name.contains('/') { return None; }
        Some(name.into_owned())
    }

    pub fn mp3_target(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let name = self
            .mp3_filename()
            .ok_or_else(|| anyhow!("no file name in mp3 url {}", self.url_mp3))?;
        let dir = match destination {
            Some(d) => d.to_path_buf(),
            None => std::env::current_dir().context("resolve current directory")?,
        };
        Ok(dir.join(name))
    }

    /// Save the MP3 under `destination` (current directory when `None`).
    /// Tracks that require purchase still download, with the voiceover markers.
    pub async fn download_mp3(&self, fetcher: &dyn Fetch, destination: Option<&Path>) -> Result<PathBuf> {
        let target = self.mp3_target(destination)?;
        let bytes = fetcher.get_bytes(&self.url_mp3).await?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::write(&target, &bytes).await.with_context(|| format!("write {}", target.display()))?;
        Ok(target)
    }
}
