use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "bensound.v1";

/// Facts about the run that produced an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    /// Site root the catalog was read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl Meta {
    pub fn is_empty(&self) -> bool { self.site.is_none() && self.duration_ms.is_none() }
}

/// What a command would do (`plan`) or what it did (`result`).
/// Serialized under a key of the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Plan(Value),
    Result(Value),
}

impl Body {
    pub fn label(&self) -> &'static str {
        match self { Body::Plan(_) => "Plan", Body::Result(_) => "Result" }
    }

    pub fn value(&self) -> &Value {
        match self { Body::Plan(v) | Body::Result(v) => v }
    }
}

/// One command's stdout document. Read-only commands always emit a result;
/// `download` and `export` emit a plan unless run with `--apply`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub apply: bool,
    #[serde(flatten)]
    pub body: Body,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl Envelope {
    fn new(op: &'static str, body: Body, meta: Meta) -> Self {
        Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            apply: matches!(body, Body::Result(_)),
            body,
            meta,
        }
    }

    pub fn plan<T: Serialize>(op: &'static str, plan: &T, meta: Meta) -> Result<Self, serde_json::Error> {
        Ok(Self::new(op, Body::Plan(serde_json::to_value(plan)?), meta))
    }

    pub fn result<T: Serialize>(op: &'static str, result: &T, meta: Meta) -> Result<Self, serde_json::Error> {
        Ok(Self::new(op, Body::Result(serde_json::to_value(result)?), meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Channel, ChannelPlaylist};

    #[test]
    fn download_plan_is_not_applied() {
        let plan = serde_json::json!({"title": "Sunny", "target": "/tmp/bensound-sunny.mp3"});
        let env = Envelope::plan("download", &plan, Meta::default()).unwrap();
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["schema_version"], "bensound.v1");
        assert_eq!(v["op"], "download");
        assert_eq!(v["apply"], false);
        assert_eq!(v["plan"]["target"], "/tmp/bensound-sunny.mp3");
        assert!(v.get("result").is_none());
        assert!(v.get("meta").is_none());
    }

    #[test]
    fn playlist_result_carries_site() {
        let playlist = ChannelPlaylist { channel: "Jazz".into(), titles: vec!["Love".into(), "The Lounge".into()] };
        let meta = Meta { site: Some("https://www.bensound.com/".into()), duration_ms: Some(12) };
        let env = Envelope::result("songs", &playlist, meta).unwrap();
        assert_eq!(env.body.label(), "Result");
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["apply"], true);
        assert_eq!(v["result"]["titles"][1], "The Lounge");
        assert_eq!(v["meta"]["site"], "https://www.bensound.com/");
        assert_eq!(v["meta"]["duration_ms"], 12);
        assert!(v.get("plan").is_none());
    }

    #[test]
    fn partial_meta_omits_missing_fields() {
        let channels = vec![Channel { name: "Pop".into(), url: "https://www.bensound.com/royalty-free-music/pop".into() }];
        let meta = Meta { site: None, duration_ms: Some(3) };
        let v = serde_json::to_value(Envelope::result("channels", &channels, meta).unwrap()).unwrap();
        assert_eq!(v["result"][0]["name"], "Pop");
        assert_eq!(v["meta"], serde_json::json!({"duration_ms": 3}));
    }
}
