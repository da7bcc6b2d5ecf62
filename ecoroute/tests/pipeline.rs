use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use chrono::{Duration, TimeZone, Utc};
use ecoroute::{
    config::MapConfig,
    geometry::{GeoJsonMapSurface, GeometryResolver, GeometryTier, MapView, DEGRADED_NOTICE},
    history::HistoryStore,
    service::{GeocodePair, Geocoder, RouteQuery, RouteQueryResponse, RouteQueryService},
    session::{QueryOutcome, RouteSession},
    EcoRouteError,
};
use ecoroute_core::model::{
    EcoRating, SavingsMessage, SelectionHistoryEntry, SortCriterion, HISTORY_CAPACITY,
};
use geo::Point;
use serde_json::{json, Value};

/// route service answering from a fixed JSON body
struct CannedRoutes {
    body: Value,
}

impl RouteQueryService for CannedRoutes {
    async fn query(&self, _query: &RouteQuery) -> Result<RouteQueryResponse, EcoRouteError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| EcoRouteError::RouteQueryFailed(e.to_string()))
    }
}

struct UnreachableRoutes;

impl RouteQueryService for UnreachableRoutes {
    async fn query(&self, _query: &RouteQuery) -> Result<RouteQueryResponse, EcoRouteError> {
        Err(EcoRouteError::RouteQueryFailed(String::from("connection refused")))
    }
}

/// history kept in a vector, through the public store trait only
#[derive(Default)]
struct VecHistoryStore {
    entries: Vec<SelectionHistoryEntry>,
}

impl HistoryStore for VecHistoryStore {
    fn read_all(&self) -> Result<Vec<SelectionHistoryEntry>, EcoRouteError> {
        Ok(self.entries.clone())
    }

    fn write_all(&mut self, entries: &[SelectionHistoryEntry]) -> Result<(), EcoRouteError> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// geocoder that yields to the runtime a few times before answering, so other
/// work can complete while it is suspended
struct SlowGeocoder {
    yields: usize,
    calls: Arc<AtomicUsize>,
}

impl SlowGeocoder {
    fn new(yields: usize) -> SlowGeocoder {
        SlowGeocoder {
            yields,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Geocoder for SlowGeocoder {
    async fn geocode(&self, _location_names: &[String]) -> Result<GeocodePair, EcoRouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
        Ok(GeocodePair {
            origin: Point::new(30.06, -1.95),
            destination: Point::new(29.63, -1.5),
        })
    }
}

fn kigali_musanze() -> Value {
    json!({
        "success": true,
        "origin": "Kigali",
        "destination": "Musanze",
        "options": [
            {
                "mode": "car",
                "duration_minutes": 95,
                "distance_km": 92.4,
                "cost_estimate": 18.5,
                "carbon_saved_percentage": 0,
                "emissions_saved_kg": 0,
                "route_summary": "Drive from Kigali to Musanze via RN4",
                "geometry": { "type": "LineString", "coordinates": [[30.06, -1.95], [29.85, -1.68], [29.63, -1.5]] }
            },
            {
                "mode": "bus",
                "duration_minutes": "about two hours",
                "distance_km": 94.0,
                "cost_estimate": 3.2,
                "carbon_saved_percentage": 64,
                "carbon_saved_kg": 11.2,
                "route_summary": "Express coach from Kigali to Musanze"
            },
            {
                "mode": "cycling",
                "duration_minutes": 340,
                "distance_km": -1,
                "carbon_saved_percentage": 100,
                "emissions_saved_kg": 17.5,
                "geometry": []
            },
            "not a route"
        ]
    })
}

#[tokio::test]
async fn test_query_rank_select_and_draw() {
    let mut session = RouteSession::new();
    let routes = CannedRoutes {
        body: kigali_musanze(),
    };
    let query = RouteQuery::new("Kigali", "Musanze").unwrap();
    let outcome = session.submit_query(&routes, &query).await;
    assert_eq!(outcome, QueryOutcome::Routes { count: 4 });

    // malformed values never survive normalization
    for option in session.options() {
        assert!(option.duration_minutes() >= 0.0);
        assert!(option.distance_km() >= 0.0);
        assert!(option.savings_percentage().is_finite());
    }
    let bus = &session.options()[1];
    assert_eq!(bus.duration_minutes(), 0.0);
    assert_eq!(bus.emissions_saved_kg(), 11.2);
    assert_eq!(EcoRating::from(bus), EcoRating::Good);

    let summary = session.summary().unwrap().clone();
    assert_eq!(summary.mode, "cycling");
    assert_eq!(summary.tree_equivalent_hours, 7000);
    assert_eq!(summary.message, SavingsMessage::Significant);

    session.sort_by(SortCriterion::Eco);
    let modes = session.options().iter().map(|o| o.mode()).collect::<Vec<_>>();
    assert_eq!(modes, vec!["cycling", "bus", "car", "unknown"]);
    assert_eq!(session.summary(), Some(&summary));

    let mut store = VecHistoryStore::default();
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    let geocoder = SlowGeocoder::new(0);
    let geocoder_calls = geocoder.calls.clone();
    let resolver = GeometryResolver::new(geocoder, MapConfig::default()).unwrap();
    let mut surface = GeoJsonMapSurface::new();

    // the car option carries its own path
    let pending = session.confirm_selection(2, &mut store, now).unwrap();
    let resolved = pending.resolve(&resolver).await;
    assert_eq!(resolved.plan.tier(), GeometryTier::Precise);
    assert!(session.complete_resolution(resolved, &mut surface));
    assert_eq!(surface.features().len(), 3);

    // the bus option only has a summary to go on
    let pending = session.confirm_selection(1, &mut store, now).unwrap();
    let resolved = pending.resolve(&resolver).await;
    assert_eq!(resolved.plan.tier(), GeometryTier::DerivedEndpoints);
    assert!(session.complete_resolution(resolved, &mut surface));
    assert_eq!(surface.features().len(), 2);
    assert_eq!(surface.notice(), Some(DEGRADED_NOTICE));

    // cycling has an empty path and no summary
    let pending = session.confirm_selection(0, &mut store, now).unwrap();
    let resolved = pending.resolve(&resolver).await;
    assert_eq!(resolved.plan.tier(), GeometryTier::DefaultViewport);
    assert!(session.complete_resolution(resolved, &mut surface));
    assert!(surface.features().is_empty());
    assert!(surface.notice().is_none());
    assert!(matches!(surface.view(), Some(MapView::Center(_))));

    assert_eq!(geocoder_calls.load(Ordering::SeqCst), 1);
    let history = store.read_all().unwrap();
    assert_eq!(
        history.iter().map(|e| e.mode.as_str()).collect::<Vec<_>>(),
        vec!["cycling", "bus", "car"]
    );
}

#[tokio::test]
async fn test_resolution_outlived_by_new_query_is_discarded() {
    let mut session = RouteSession::new();
    let routes = CannedRoutes {
        body: kigali_musanze(),
    };
    let query = RouteQuery::new("Kigali", "Musanze").unwrap();
    session.submit_query(&routes, &query).await;

    let mut store = VecHistoryStore::default();
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    let pending = session.confirm_selection(1, &mut store, now).unwrap();

    let resolver = GeometryResolver::new(SlowGeocoder::new(5), MapConfig::default()).unwrap();
    let other = RouteQuery::new("Huye", "Nyanza").unwrap();
    // the geocoder is still suspended when the new query completes
    let (resolved, outcome) = tokio::join!(
        pending.resolve(&resolver),
        session.submit_query(&routes, &other)
    );
    assert!(outcome.has_routes());
    assert_eq!(resolved.plan.tier(), GeometryTier::DerivedEndpoints);

    let mut surface = GeoJsonMapSurface::new();
    assert!(!session.complete_resolution(resolved, &mut surface));
    assert!(surface.features().is_empty());
    assert!(surface.view().is_none());
    assert!(session.displayed().is_none());
}

#[tokio::test]
async fn test_failed_query_leaves_empty_session() {
    let mut session = RouteSession::new();
    let query = RouteQuery::new("Kigali", "Musanze").unwrap();
    session
        .submit_query(
            &CannedRoutes {
                body: kigali_musanze(),
            },
            &query,
        )
        .await;
    assert!(!session.options().is_empty());

    let outcome = session.submit_query(&UnreachableRoutes, &query).await;
    assert!(matches!(outcome, QueryOutcome::NoRoutes { .. }));
    assert!(session.options().is_empty());
    assert!(session.summary().is_none());

    let outcome = session
        .submit_query(
            &CannedRoutes {
                body: json!({ "success": false, "error": "Could not calculate routes" }),
            },
            &query,
        )
        .await;
    assert_eq!(
        outcome,
        QueryOutcome::NoRoutes {
            reason: String::from("Could not calculate routes")
        }
    );
}

#[tokio::test]
async fn test_history_keeps_five_most_recent() {
    let mut session = RouteSession::new();
    let routes = CannedRoutes {
        body: kigali_musanze(),
    };
    let query = RouteQuery::new("Kigali", "Musanze").unwrap();
    session.submit_query(&routes, &query).await;

    let mut store = VecHistoryStore::default();
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    for i in 0..6 {
        let index = i % 3;
        session
            .confirm_selection(index, &mut store, start + Duration::minutes(i as i64))
            .unwrap();
    }
    let history = store.read_all().unwrap();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0].timestamp, start + Duration::minutes(5));
    assert_eq!(history[4].timestamp, start + Duration::minutes(1));
}
