use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use url::Url;

use crate::fetch::Fetch;
use crate::parse;
use crate::telemetry::{self};
use crate::telemetry::ops::refresh::Phase as RefreshPhase;

mod assets;
mod song;
mod types;

pub use song::Song;
pub use types::{Channel, ChannelPlaylist, RefreshSummary};

/// In-memory view of the site: channels, per-channel playlists and the
/// de-duplicated song list. Nothing is fetched until asked.
pub struct Catalog {
    fetcher: Arc<dyn Fetch>,
    base: Url,
    channels: Vec<Channel>,
    playlists: Vec<ChannelPlaylist>,
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(fetcher: Arc<dyn Fetch>, base: Url) -> Self {
        Self { fetcher, base, channels: Vec::new(), playlists: Vec::new(), songs: Vec::new() }
    }

    pub fn fetcher(&self) -> &dyn Fetch { self.fetcher.as_ref() }

    /// Read the channel menu from the home page, replacing any known channels.
    pub async fn extract_channels(&mut self) -> Result<&[Channel]> {
        let log = telemetry::refresh();
        let url = self.base.to_string();
        let html = {
            let _s = log.span_kv(&RefreshPhase::FetchChannels, [("url", url.clone())]).entered();
            self.fetcher.get_text(&url).await.with_context(|| format!("fetch channel menu {url}"))?
        };
        let channels = { let _s = log.span(&RefreshPhase::ParseChannels).entered(); parse::parse_channels(&html, &self.base) };
        if channels.is_empty() { log.warn_kv("no channels found", [("url", url)]); }
        else { log.debug(format!("channels={}", channels.len())); }
        self.channels = channels;
        Ok(&self.channels)
    }

    async fn ensure_channels(&mut self) -> Result<()> {
        if self.channels.is_empty() { self.extract_channels().await?; }
        Ok(())
    }

    /// Crawl every listing page of one channel, following pagination
    /// breadth-first from the channel URL. Songs come back in crawl order.
    pub async fn extract_channel_music(&mut self, channel: &str) -> Result<Vec<Song>> {
        self.ensure_channels().await?;
        let start = self
            .channel(channel)
            .map(|c| c.url.clone())
            .ok_or_else(|| anyhow!("unknown channel: {channel}"))?;

        let log = telemetry::refresh();
        let today = Local::now().date_naive();
        let mut to_fetch: VecDeque<String> = VecDeque::from([start]);
        let mut fetched: HashSet<String> = HashSet::new();
        let mut songs: Vec<Song> = Vec::new();

        while let Some(url) = to_fetch.pop_front() {
            if !fetched.insert(url.clone()) { continue; }
            let html = {
                let _s = log.span_kv(&RefreshPhase::FetchPage, [("url", url.clone())]).entered();
                self.fetcher.get_text(&url).await.with_context(|| format!("fetch listing page {url}"))?
            };
            let page = { let _s = log.span(&RefreshPhase::ParsePage).entered(); parse::parse_channel_page(&html, &self.base, today) };

            for next in page.pages {
                if !fetched.contains(&next) && !to_fetch.contains(&next) { to_fetch.push_back(next); }
            }
            if page.skipped > 0 {
                log.warn_kv("skipped incomplete song blocks", [("url", url.clone()), ("skipped", page.skipped.to_string())]);
            }
            log.debug_kv("page", [("url", url), ("songs", page.songs.len().to_string())]);
            songs.extend(page.songs);
        }

        log.channel_summary(channel, fetched.len(), songs.len());
        Ok(songs)
    }

    /// Crawl every channel and rebuild playlists and the song list.
    /// Does not download any audio.
    pub async fn refresh(&mut self) -> Result<RefreshSummary> {
        let log = telemetry::refresh();
        let _g = log.root_span().entered();
        self.ensure_channels().await?;
        let names = self.channel_names();

        let mut playlists: Vec<ChannelPlaylist> = Vec::with_capacity(names.len());
        let mut songs: Vec<Song> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut listings = 0usize;

        for name in names {
            let _g = log.span_kv(&RefreshPhase::Channel, [("channel", name.clone())]).entered();
            let music = self.extract_channel_music(&name).await?;
            listings += music.len();
            let titles = music.iter().map(|s| s.title.clone()).collect();
            for song in music {
                if seen.insert(song.title.clone()) { songs.push(song); }
            }
            playlists.push(ChannelPlaylist { channel: name, titles });
        }

        self.playlists = playlists;
        self.songs = songs;
        let summary = RefreshSummary { channels: self.channels.len(), songs: self.songs.len(), listings };
        log.totals(&summary);
        Ok(summary)
    }

    pub fn channels(&self) -> &[Channel] { &self.channels }

    pub fn channel(&self, name: &str) -> Option<&Channel> { self.channels.iter().find(|c| c.name == name) }

    pub fn channel_names(&self) -> Vec<String> { self.channels.iter().map(|c| c.name.clone()).collect() }

    pub fn songs(&self) -> &[Song] { &self.songs }

    pub fn song_titles(&self) -> Vec<&str> { self.songs.iter().map(|s| s.title.as_str()).collect() }

    pub fn song_by_index(&self, index: usize) -> Option<&Song> { self.songs.get(index) }

    /// First song whose title matches exactly; case-sensitive.
    pub fn song_by_title(&self, title: &str) -> Option<&Song> { self.songs.iter().find(|s| s.title == title) }

    pub fn playlist(&self, channel: &str) -> Option<&ChannelPlaylist> { self.playlists.iter().find(|p| p.channel == channel) }

    pub fn playlists(&self) -> &[ChannelPlaylist] { &self.playlists }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::fetch::mock::MockFetcher;

    const HOME: &str = "https://www.bensound.com/";
    const JAZZ: &str = "https://www.bensound.com/royalty-free-music/jazz";
    const JAZZ_2: &str = "https://www.bensound.com/royalty-free-music/jazz/2";
    const POP: &str = "https://www.bensound.com/royalty-free-music/pop";

    fn home_page() -> String {
        format!(r#"<div id="menu"><a href="{HOME}royalty-free-music">All</a><a href="{JAZZ}">Jazz</a><a href="/royalty-free-music/pop">Pop</a></div>"#)
    }

    fn listing(titles: &[&str], pages: &[&str]) -> String {
        let blocks: String = titles
            .iter()
            .map(|t| format!(r#"<div class="bloc_produit"><div class="titre"><p>{t}</p></div><audio src="bensound-music/{t}.mp3"></audio></div>"#))
            .collect();
        let links: String = pages.iter().map(|p| format!(r#"<a class="page" href="{p}">n</a>"#)).collect();
        format!(r#"<div class="bloc_cat">{blocks}</div><div class="pagenavi">{links}</div>"#)
    }

    fn site() -> MockFetcher {
        MockFetcher::new()
            .with_page(HOME, home_page())
            .with_page(JAZZ, listing(&["Jazzy Frenchy", "The Lounge"], &[JAZZ, JAZZ_2]))
            .with_page(JAZZ_2, listing(&["Love"], &[JAZZ, JAZZ_2]))
            .with_page(POP, listing(&["Sunny", "The Lounge", "Ukulele"], &[]))
    }

    fn catalog(mock: Arc<MockFetcher>) -> Catalog {
        Catalog::new(mock, Url::parse(HOME).unwrap())
    }

    #[tokio::test]
    async fn channels_from_home_menu() {
        let mut cat = catalog(Arc::new(site()));
        let names: Vec<String> = cat.extract_channels().await.unwrap().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Jazz", "Pop"]);
        assert_eq!(cat.channel("Pop").unwrap().url, POP);
    }

    #[tokio::test]
    async fn channel_crawl_follows_pagination_once() {
        let mock = Arc::new(site());
        let mut cat = catalog(mock.clone());
        let songs = cat.extract_channel_music("Jazz").await.unwrap();
        let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Jazzy Frenchy", "The Lounge", "Love"]);
        assert_eq!(mock.calls(), vec![HOME.to_string(), JAZZ.to_string(), JAZZ_2.to_string()]);
    }

    #[tokio::test]
    async fn unknown_channel_is_an_error() {
        let mut cat = catalog(Arc::new(site()));
        let err = cat.extract_channel_music("Metal").await.unwrap_err();
        assert!(err.to_string().contains("unknown channel: Metal"));
    }

    #[tokio::test]
    async fn refresh_builds_playlists_and_unique_song_list() {
        let mut cat = catalog(Arc::new(site()));
        let summary = cat.refresh().await.unwrap();
        assert_eq!(summary, RefreshSummary { channels: 2, songs: 5, listings: 6 });

        assert_eq!(cat.song_titles(), vec!["Jazzy Frenchy", "The Lounge", "Love", "Sunny", "Ukulele"]);
        assert_eq!(cat.playlist("Pop").unwrap().titles, vec!["Sunny", "The Lounge", "Ukulele"]);
        assert_eq!(cat.playlists().len(), 2);
        assert!(cat.playlist("Metal").is_none());
    }

    #[tokio::test]
    async fn lookups_by_index_and_title() {
        let mut cat = catalog(Arc::new(site()));
        cat.refresh().await.unwrap();

        assert_eq!(cat.song_by_index(0).unwrap().title, "Jazzy Frenchy");
        assert_eq!(cat.song_by_index(4).unwrap().title, "Ukulele");
        assert!(cat.song_by_index(5).is_none());

        assert_eq!(cat.song_by_title("Jazzy Frenchy").unwrap().url_mp3, "https://www.bensound.com/bensound-music/Jazzy%20Frenchy.mp3");
        assert!(cat.song_by_title("jazzy frenchy").is_none());
    }

    #[tokio::test]
    async fn failed_listing_page_propagates() {
        let mock = site().with_status(JAZZ_2, StatusCode::INTERNAL_SERVER_ERROR);
        let mut cat = catalog(Arc::new(mock));
        let err = cat.refresh().await.unwrap_err();
        assert!(format!("{err:#}").contains("500"));
        assert!(cat.songs().is_empty());
    }

    #[tokio::test]
    async fn empty_menu_leaves_catalog_empty() {
        let mock = MockFetcher::new().with_page(HOME, "<html><body>redesigned</body></html>");
        let mut cat = catalog(Arc::new(mock));
        let summary = cat.refresh().await.unwrap();
        assert_eq!(summary, RefreshSummary { channels: 0, songs: 0, listings: 0 });
        assert!(cat.song_titles().is_empty());
    }
}
