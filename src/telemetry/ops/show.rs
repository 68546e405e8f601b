use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Show;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Refresh, Select, Output }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Refresh => "refresh", Phase::Select => "select", Phase::Output => "output" } }
    fn span(&self) -> Span { match self { Phase::Refresh => info_span!("refresh"), Phase::Select => info_span!("select"), Phase::Output => info_span!("output") } }
}

impl OpMarker for Show {
    const NAME: &'static str = "show";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("show") }
}
