use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Songs;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Crawl, Output }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Crawl => "crawl", Phase::Output => "output" } }
    fn span(&self) -> Span { match self { Phase::Crawl => info_span!("crawl"), Phase::Output => info_span!("output") } }
}

impl OpMarker for Songs {
    const NAME: &'static str = "songs";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("songs") }
}
