use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static JSON_MODE: AtomicBool = AtomicBool::new(false);
static STARTED: OnceLock<Instant> = OnceLock::new();
static SITE: OnceLock<String> = OnceLock::new();

/// `--json`: results go to stdout as a single JSON envelope.
pub fn set_json_mode(on: bool) { JSON_MODE.store(on, Ordering::Relaxed); }
pub fn json_mode() -> bool { JSON_MODE.load(Ordering::Relaxed) }

pub fn logs_are_json() -> bool {
    matches!(std::env::var("BENSOUND_LOG_FORMAT").as_deref(), Ok("json"))
}

/// Base URL reported in every envelope's `meta.site`.
pub fn set_site(url: &str) { let _ = SITE.set(url.to_string()); }
pub fn site() -> Option<String> { SITE.get().cloned() }

pub fn elapsed_ms() -> Option<u128> {
    STARTED.get().map(|t| t.elapsed().as_millis())
}

/// Initialize tracing/logging according to RUST_LOG and BENSOUND_LOG_FORMAT.
/// - Defaults to `info` if `RUST_LOG` is unset
/// - Supports `BENSOUND_LOG_FORMAT=json` for JSON logs
/// - Always writes to stderr; stdout carries results and audio
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    use tracing_subscriber::prelude::*; // for .with()

    let _ = STARTED.set(Instant::now());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}
