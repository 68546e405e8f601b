use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Stream;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Refresh, Select, Fetch, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Refresh => "refresh",
        Phase::Select => "select",
        Phase::Fetch => "fetch",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::Refresh => info_span!("refresh"),
        Phase::Select => info_span!("select"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Stream {
    const NAME: &'static str = "stream";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("stream") }
}
