use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

/// One royalty-free track as listed on a channel page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub title: String,
    /// `m:ss` as printed by the site.
    pub length: String,
    pub description: String,
    pub for_download: bool,
    pub for_purchase: bool,
    pub license: String,
    pub url_main: String,
    pub url_image: String,
    pub url_mp3: String,
    /// `null` in properties when the track is not for sale.
    pub url_purchase: Option<String>,
    /// Day the record was scraped.
    pub modified: NaiveDate,
}

impl Song {
    /// Every field as a JSON object, ready for a database row or an export file.
    pub fn properties(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
pub(crate) fn sample(title: &str) -> Song {
    Song {
        title: title.to_string(),
        length: "2:30".into(),
        description: "Upbeat ukulele".into(),
        for_download: true,
        for_purchase: false,
        license: "Free with attribution.".into(),
        url_main: format!("https://www.bensound.com/royalty-free-music/track/{}", title.to_lowercase()),
        url_image: format!("https://www.bensound.com/bensound-img/{}.jpg", title.to_lowercase()),
        url_mp3: format!("https://www.bensound.com/bensound-music/bensound-{}.mp3", title.to_lowercase()),
        url_purchase: None,
        modified: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_cover_every_field() {
        let song = sample("Ukulele");
        let props = song.properties().unwrap();
        assert_eq!(props["title"], "Ukulele");
        assert_eq!(props["for_download"], true);
        assert_eq!(props["modified"], "2026-10-17");
        assert_eq!(props["url_purchase"], Value::Null);
        assert_eq!(props.as_object().unwrap().len(), 11);
    }

    #[test]
    fn free_and_paid_tracks_share_one_key_set() {
        let free = sample("Sunny").properties().unwrap();
        let mut paid = sample("Epic");
        paid.for_purchase = true;
        paid.url_purchase = Some("https://www.bensound.com/licensing?track=epic".into());
        let paid = paid.properties().unwrap();

        let keys = |v: &Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&free), keys(&paid));
        assert_eq!(paid["url_purchase"], "https://www.bensound.com/licensing?track=epic");
    }
}
