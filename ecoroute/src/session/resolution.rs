use ecoroute_core::model::RouteOption;

use crate::{
    geometry::{GeometryResolver, RenderPlan},
    service::Geocoder,
};

/// identifies the query and the selection a geometry resolution was started
/// for. a ticket is current only while neither has been replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket {
    pub(super) generation: u64,
    pub(super) selection: u64,
}

/// a confirmed selection whose geometry has not been resolved yet. holds its
/// own copy of the option so the session stays free while resolution is
/// suspended.
#[derive(Debug, Clone)]
pub struct PendingResolution {
    ticket: ResolutionTicket,
    option: RouteOption,
}

impl PendingResolution {
    pub(super) fn new(ticket: ResolutionTicket, option: RouteOption) -> PendingResolution {
        PendingResolution { ticket, option }
    }

    pub fn ticket(&self) -> ResolutionTicket {
        self.ticket
    }

    pub fn option(&self) -> &RouteOption {
        &self.option
    }

    pub async fn resolve<G: Geocoder>(self, resolver: &GeometryResolver<G>) -> ResolvedSelection {
        let plan = resolver.resolve(&self.option).await;
        ResolvedSelection {
            ticket: self.ticket,
            plan,
        }
    }
}

/// the outcome of a resolution, still to be checked against the session
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    pub ticket: ResolutionTicket,
    pub plan: RenderPlan,
}
