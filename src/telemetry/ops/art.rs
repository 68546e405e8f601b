use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Art;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Refresh, Select, Fetch, Save, Output }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Refresh => "refresh",
        Phase::Select => "select",
        Phase::Fetch => "fetch",
        Phase::Save => "save",
        Phase::Output => "output",
    }}
    fn span(&self) -> Span { match self {
        Phase::Refresh => info_span!("refresh"),
        Phase::Select => info_span!("select"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Save => info_span!("save"),
        Phase::Output => info_span!("output"),
    }}
}

impl OpMarker for Art {
    const NAME: &'static str = "art";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("art") }
}
