use std::io::{self, Write};
use serde_json::Value;

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter: Send + Sync {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Human rendering of the payload: `key: value` lines, lists as `- item`.
pub struct TextPresenter { pub pretty: bool }
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty || !env.apply { writeln!(w, "{}: {}", env.body.label(), env.op)?; }
        if self.pretty {
            if let Some(site) = &env.meta.site { writeln!(w, "site: {site}")?; }
        }
        write_value(w, env.body.value(), 0)
    }
}

fn write_value(w: &mut dyn Write, v: &Value, indent: usize) -> io::Result<()> {
    let pad = " ".repeat(indent);
    match v {
        Value::Object(map) => {
            for (k, item) in map {
                if is_scalar(item) { writeln!(w, "{pad}{k}: {}", scalar(item))?; }
                else { writeln!(w, "{pad}{k}:")?; write_value(w, item, indent + 2)?; }
            }
        }
        Value::Array(items) => {
            for item in items {
                if is_scalar(item) { writeln!(w, "{pad}- {}", scalar(item))?; }
                else { write_value(w, item, indent)?; writeln!(w)?; }
            }
        }
        other => writeln!(w, "{pad}{}", scalar(other))?,
    }
    Ok(())
}

fn is_scalar(v: &Value) -> bool { !matches!(v, Value::Object(_) | Value::Array(_)) }

fn scalar(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn new(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter { pretty: cfg.pretty }),
        };
        Emitter { presenter }
    }

    pub fn emit(&self, env: &Envelope) -> io::Result<()> {
        let mut out = io::stdout().lock();
        self.presenter.emit(env, &mut out)?;
        out.flush()
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::types::Meta;
    use serde_json::json;

    fn render(p: &dyn Presenter, env: &Envelope) -> String {
        let mut buf: Vec<u8> = Vec::new();
        p.emit(env, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_renders_nested_payload() {
        let payload = json!({
            "channel": "Jazz",
            "titles": ["Love", "The Lounge"],
            "url_purchase": null,
        });
        let env = Envelope::result("songs", &payload, Meta::default()).unwrap();
        let out = render(&TextPresenter { pretty: false }, &env);
        assert_eq!(out, "channel: Jazz\ntitles:\n  - Love\n  - The Lounge\nurl_purchase: -\n");
    }

    #[test]
    fn text_plan_has_header() {
        let env = Envelope::plan("export", &json!({"songs": 4}), Meta::default()).unwrap();
        let out = render(&TextPresenter { pretty: false }, &env);
        assert_eq!(out, "Plan: export\nsongs: 4\n");
    }

    #[test]
    fn pretty_text_names_the_site() {
        let meta = Meta { site: Some("https://www.bensound.com/".into()), duration_ms: None };
        let env = Envelope::result("show", &json!({"title": "Sunny"}), meta).unwrap();
        let out = render(&TextPresenter { pretty: true }, &env);
        assert_eq!(out, "Result: show\nsite: https://www.bensound.com/\ntitle: Sunny\n");
    }

    #[test]
    fn json_is_one_line() {
        let env = Envelope::result("channels", &json!([{"name": "Pop"}]), Meta::default()).unwrap();
        let out = render(&JsonPresenter { pretty: false }, &env);
        assert_eq!(out.lines().count(), 1);
        let v: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(v["result"][0]["name"], "Pop");
        assert_eq!(v["op"], "channels");
    }
}
