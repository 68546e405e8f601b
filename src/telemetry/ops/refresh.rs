use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Refresh;

#[derive(Copy, Clone, Debug)]
pub enum Phase { FetchChannels, ParseChannels, Channel, FetchPage, ParsePage }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::FetchChannels => "fetch_channels",
        Phase::ParseChannels => "parse_channels",
        Phase::Channel => "channel",
        Phase::FetchPage => "fetch_page",
        Phase::ParsePage => "parse_page",
    }}
    fn span(&self) -> Span { match self {
        Phase::FetchChannels => info_span!("fetch_channels"),
        Phase::ParseChannels => info_span!("parse_channels"),
        Phase::Channel => info_span!("channel"),
        Phase::FetchPage => info_span!("fetch_page"),
        Phase::ParsePage => info_span!("parse_page"),
    }}
}

impl OpMarker for Refresh {
    const NAME: &'static str = "refresh";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("refresh") }
}
