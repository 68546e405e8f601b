use serde::Serialize;

/// A style tag from the site menu. A song can sit in several channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel { pub name: String, pub url: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelPlaylist { pub channel: String, pub titles: Vec<String> }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub channels: usize,
    /// Distinct titles kept in the song list.
    pub songs: usize,
    /// Channel entries including titles listed under several channels.
    pub listings: usize,
}
