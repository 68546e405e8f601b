use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Download;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Refresh, Select, Plan, Fetch }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Refresh => "refresh",
        Phase::Select => "select",
        Phase::Plan => "plan",
        Phase::Fetch => "fetch",
    }}
    fn span(&self) -> Span { match self {
        Phase::Refresh => info_span!("refresh"),
        Phase::Select => info_span!("select"),
        Phase::Plan => info_span!("plan"),
        Phase::Fetch => info_span!("fetch"),
    }}
}

impl OpMarker for Download {
    const NAME: &'static str = "download";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("download") }
}
