use chrono::NaiveDate;
use scraper::{ElementRef, Selector};
use url::Url;

use super::text::element_text;
use crate::catalog::Song;

pub const BLOCK_CONTAINER: &str = "div.bloc_cat";
pub const BLOCKS: &str = "div.bloc_produit, div.bloc_produit1";

/// One product block into a song. `None` when the block has no title or no audio.
pub fn parse_block(block: ElementRef<'_>, base: &Url, modified: NaiveDate) -> Option<Song> {
    let title = first_text(block, "div.titre p").filter(|t| !t.is_empty())?;
    let url_mp3 = first_attr(block, "audio[src]", "src")
        .and_then(|src| resolve(base, &src))
        .or_else(|| first_attr(block, "audio source[src]", "src").and_then(|src| resolve(base, &src)))?;

    let length = first_text(block, "p.totime").unwrap_or_default();
    let description = first_text(block, "div.description").unwrap_or_default();
    let url_main = first_attr(block, "div.img_mini a[href]", "href")
        .and_then(|h| resolve(base, &h))
        .unwrap_or_default();
    let url_image = first_attr(block, "div.img_mini img[src]", "src")
        .and_then(|s| resolve(base, &s))
        .unwrap_or_default();

    let for_download = exists(block, "div.bouton_download");
    let for_purchase = exists(block, "div.bouton_purchase");
    let url_purchase = if for_purchase {
        first_attr(block, "div.pop_license a[href]", "href").and_then(|h| resolve(base, &h))
    } else {
        None
    };

    Some(Song {
        title,
        length,
        description,
        for_download,
        for_purchase,
        license: license_summary(block),
        url_main,
        url_image,
        url_mp3,
        url_purchase,
        modified,
    })
}

/// Heading and paragraph of the license popup, then the restrictions it lists.
fn license_summary(block: ElementRef<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(pop) = first(block, "div.pop_license") {
        for sel in ["h1", "p"] {
            if let Some(t) = first_text(pop, sel).filter(|t| !t.is_empty()) {
                parts.push(with_period(t));
            }
        }
    }
    let restrictions: Vec<String> = Selector::parse("span.nothis")
        .map(|sel| block.select(&sel).map(element_text).filter(|t| !t.is_empty()).collect())
        .unwrap_or_default();
    if !restrictions.is_empty() {
        parts.push(restrictions.join(", "));
    }
    if parts.is_empty() { return String::new(); }
    with_period(parts.join(" "))
}

fn with_period(mut s: String) -> String {
    if !s.ends_with('.') { s.push('.'); }
    s
}

fn resolve(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() { return None; }
    base.join(href).ok().map(|u| u.to_string())
}

fn first<'a>(el: ElementRef<'a>, sel: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(sel).ok()?;
    el.select(&sel).next()
}

fn first_text(el: ElementRef<'_>, sel: &str) -> Option<String> {
    first(el, sel).map(element_text)
}

fn first_attr(el: ElementRef<'_>, sel: &str, attr: &str) -> Option<String> {
    first(el, sel)?.value().attr(attr).map(|s| s.to_string())
}

fn exists(el: ElementRef<'_>, sel: &str) -> bool {
    first(el, sel).is_some()
}
