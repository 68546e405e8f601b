use chrono::NaiveDate;
use scraper::{Html, Selector};
use url::Url;

use crate::catalog::Song;

mod channels;
mod songs;
mod text;

pub use channels::parse_channels;

/// Everything one listing page contributes to a channel crawl.
#[derive(Debug, Default)]
pub struct ChannelPage {
    pub songs: Vec<Song>,
    /// Absolute pagination links, in page order, without repeats.
    pub pages: Vec<String>,
    /// Product blocks that lacked a title or an audio source.
    pub skipped: usize,
}

pub fn parse_channel_page(html: &str, base: &Url, modified: NaiveDate) -> ChannelPage {
    let doc = Html::parse_document(html);
    let mut page = ChannelPage { pages: pagination(&doc, base), ..Default::default() };

    let (Ok(container_sel), Ok(block_sel)) = (Selector::parse(songs::BLOCK_CONTAINER), Selector::parse(songs::BLOCKS)) else {
        return page;
    };
    let Some(container) = doc.select(&container_sel).next() else { return page };

    for block in container.select(&block_sel) {
        match songs::parse_block(block, base, modified) {
            Some(song) => page.songs.push(song),
            None => page.skipped += 1,
        }
    }
    page
}

fn pagination(doc: &Html, base: &Url) -> Vec<String> {
    let Ok(sel) = Selector::parse("div.pagenavi a.page") else { return Vec::new() };
    let mut out: Vec<String> = Vec::new();
    for a in doc.select(&sel) {
        let Some(url) = a.value().attr("href").and_then(|h| base.join(h.trim()).ok()) else { continue };
        let url = url.to_string();
        if !out.contains(&url) { out.push(url); }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url { Url::parse("https://www.bensound.com/").unwrap() }
    fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, 17).unwrap() }

    #[test]
    fn listing_page_songs_and_pages() {
        let html = r#"
        <html><body>
          <div class="bloc_cat">
            <div class="bloc_produit"><div class="titre"><p>One</p></div><audio src="m/one.mp3"></audio></div>
            <div class="bloc_produit1"><div class="titre"><p>Two</p></div><audio src="m/two.mp3"></audio></div>
            <div class="bloc_produit"><div class="titre"><p>Broken</p></div></div>
          </div>
          <div class="pagenavi">
            <span class="current">1</span>
            <a class="page" href="https://www.bensound.com/royalty-free-music/jazz/2">2</a>
            <a class="page" href="/royalty-free-music/jazz/3">3</a>
            <a class="nextpostslink" href="/royalty-free-music/jazz/2">»</a>
            <a class="page" href="/royalty-free-music/jazz/2">2</a>
          </div>
        </body></html>
        "#;
        let page = parse_channel_page(html, &base(), today());
        let titles: Vec<&str> = page.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert_eq!(page.skipped, 1);
        assert_eq!(page.pages, vec![
            "https://www.bensound.com/royalty-free-music/jazz/2".to_string(),
            "https://www.bensound.com/royalty-free-music/jazz/3".to_string(),
        ]);
    }

    #[test]
    fn changed_layout_yields_empty_page() {
        let page = parse_channel_page("<html><body><div class='grid'>new site</div></body></html>", &base(), today());
        assert!(page.songs.is_empty());
        assert!(page.pages.is_empty());
        assert_eq!(page.skipped, 0);
    }
}
