use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Channels;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Extract, Output }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Extract => "extract", Phase::Output => "output" } }
    fn span(&self) -> Span { match self { Phase::Extract => info_span!("extract"), Phase::Output => info_span!("output") } }
}

impl OpMarker for Channels {
    const NAME: &'static str = "channels";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("channels") }
}
