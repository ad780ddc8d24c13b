use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Badges;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Job, Fetch, Extract, Fallback, Write, Marker }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Job => "job",
        Phase::Fetch => "fetch",
        Phase::Extract => "extract",
        Phase::Fallback => "fallback",
        Phase::Write => "write",
        Phase::Marker => "marker",
    }}
    fn span(&self) -> Span { match self {
        Phase::Job => info_span!("job"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Extract => info_span!("extract"),
        Phase::Fallback => info_span!("fallback"),
        Phase::Write => info_span!("write"),
        Phase::Marker => info_span!("marker"),
    }}
}

impl OpMarker for Badges {
    const NAME: &'static str = "badges";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("badges") }
}
