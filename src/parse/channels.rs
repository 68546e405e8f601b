use scraper::{Html, Selector};
use url::Url;

use super::text::element_text;
use crate::catalog::Channel;

/// Label of the catch-all menu entry; it is not a channel.
const ALL_CHANNELS: &str = "All";

/// Channels from the `div#menu` navigation, in menu order.
pub fn parse_channels(html: &str, base: &Url) -> Vec<Channel> {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse("div#menu a") else { return Vec::new() };

    let mut out: Vec<Channel> = Vec::new();
    for a in doc.select(&sel) {
        let name = element_text(a);
        if name.is_empty() || name == ALL_CHANNELS { continue; }
        let Some(url) = a.value().attr("href").and_then(|h| base.join(h.trim()).ok()) else { continue };
        if out.iter().any(|c| c.name == name) { continue; }
        out.push(Channel { name, url: url.to_string() });
    }
    out
}
