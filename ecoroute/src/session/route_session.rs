use chrono::{DateTime, Utc};
use ecoroute_core::model::{RouteOption, SavingsSummary, SortCriterion};

use super::{PendingResolution, QueryOutcome, ResolutionTicket, ResolvedSelection};
use crate::{
    geometry::{MapSurface, RenderPlan},
    history::{HistoryStore, SelectionRecorder},
    service::{RouteQuery, RouteQueryResponse, RouteQueryService},
    EcoRouteError,
};

/// state of one user session: the active route options, their savings
/// summary, the active ordering and what is currently drawn on the map.
///
/// two counters guard against out-of-order completion. `generation` moves on
/// every new query and `selection` on every confirmed selection. results that
/// were started under older values are dropped on arrival.
#[derive(Debug, Default)]
pub struct RouteSession {
    options: Vec<RouteOption>,
    summary: Option<SavingsSummary>,
    criterion: Option<SortCriterion>,
    generation: u64,
    selection: u64,
    displayed: Option<RenderPlan>,
}

impl RouteSession {
    pub fn new() -> RouteSession {
        RouteSession::default()
    }

    pub fn options(&self) -> &[RouteOption] {
        &self.options
    }

    /// computed once per query, over the options in response order
    pub fn summary(&self) -> Option<&SavingsSummary> {
        self.summary.as_ref()
    }

    pub fn criterion(&self) -> Option<SortCriterion> {
        self.criterion
    }

    /// the plan last drawn on the map surface
    pub fn displayed(&self) -> Option<&RenderPlan> {
        self.displayed.as_ref()
    }

    /// sends the query and replaces the active options with the response
    pub async fn submit_query<S: RouteQueryService>(
        &mut self,
        service: &S,
        query: &RouteQuery,
    ) -> QueryOutcome {
        let generation = self.begin_query();
        let response = service.query(query).await;
        self.accept_response(generation, response)
    }

    /// starts a new query. everything tied to the previous one is dropped,
    /// and resolutions still in flight become stale.
    pub fn begin_query(&mut self) -> u64 {
        self.generation += 1;
        self.options.clear();
        self.summary = None;
        self.criterion = None;
        self.displayed = None;
        self.generation
    }

    /// applies the response of the query started at `generation`. a transport
    /// error, `success: false` and an empty option list all end as
    /// [`QueryOutcome::NoRoutes`].
    pub fn accept_response(
        &mut self,
        generation: u64,
        response: Result<RouteQueryResponse, EcoRouteError>,
    ) -> QueryOutcome {
        if generation != self.generation {
            log::info!(
                "discarding route response for query {generation}, query {} is active",
                self.generation
            );
            return QueryOutcome::Superseded;
        }
        let response = match response {
            Ok(r) => r,
            Err(e) => {
                log::error!("route query failed: {e}");
                return QueryOutcome::NoRoutes {
                    reason: e.to_string(),
                };
            }
        };
        if !response.success {
            let reason = response
                .error
                .unwrap_or_else(|| String::from("route service reported failure"));
            log::error!("route query failed: {reason}");
            return QueryOutcome::NoRoutes { reason };
        }
        if response.options.is_empty() {
            log::info!("route query returned no options");
            return QueryOutcome::NoRoutes {
                reason: String::from("no route options returned"),
            };
        }
        self.options = RouteOption::from_raw_records(&response.options);
        self.summary = SavingsSummary::from_options(&self.options);
        QueryOutcome::Routes {
            count: self.options.len(),
        }
    }

    pub fn sort_by(&mut self, criterion: SortCriterion) {
        criterion.rank(&mut self.options);
        self.criterion = Some(criterion);
    }

    /// records the option at `index` in the history and hands back what is
    /// needed to resolve its geometry. None if there is no such option.
    pub fn confirm_selection<H: HistoryStore + ?Sized>(
        &mut self,
        index: usize,
        store: &mut H,
        now: DateTime<Utc>,
    ) -> Option<PendingResolution> {
        let Some(option) = self.options.get(index) else {
            log::warn!(
                "cannot select option {index}, session has {} options",
                self.options.len()
            );
            return None;
        };
        SelectionRecorder::record(store, option, now);
        self.selection += 1;
        let ticket = ResolutionTicket {
            generation: self.generation,
            selection: self.selection,
        };
        Some(PendingResolution::new(ticket, option.clone()))
    }

    pub fn is_current(&self, ticket: &ResolutionTicket) -> bool {
        ticket.generation == self.generation && ticket.selection == self.selection
    }

    /// draws a resolved plan, replacing the previous route. returns false and
    /// leaves the surface alone when the resolution is stale.
    pub fn complete_resolution<S: MapSurface + ?Sized>(
        &mut self,
        resolved: ResolvedSelection,
        surface: &mut S,
    ) -> bool {
        if !self.is_current(&resolved.ticket) {
            log::info!(
                "discarding stale {} resolution (query {}, selection {})",
                resolved.plan.tier(),
                resolved.ticket.generation,
                resolved.ticket.selection
            );
            return false;
        }
        surface.clear_route();
        resolved.plan.draw_on(surface);
        self.displayed = Some(resolved.plan);
        true
    }
}
