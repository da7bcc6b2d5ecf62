use ecoroute_core::model::{Position, RouteOption, RouteOptionError};
use ecoroute_core::util::geo_utils;
use geo::Point;

use super::{Anchor, RenderPlan, SummaryEndpoints, DEGRADED_NOTICE};
use crate::{config::MapConfig, service::Geocoder, EcoRouteError};

/// decides what to draw for a selected route option. fallback order:
///
///   1. the option's own geometry, when present and non-empty
///   2. endpoints geocoded from a "from <origin> to <destination>" summary,
///      when the option has no geometry
///   3. the default viewport
///
/// a geometry that is present but cannot be drawn goes straight to the default
/// viewport. no failure escapes [`GeometryResolver::resolve`].
pub struct GeometryResolver<G> {
    geocoder: G,
    endpoints: SummaryEndpoints,
    map: MapConfig,
}

impl<G: Geocoder> GeometryResolver<G> {
    pub fn new(geocoder: G, map: MapConfig) -> Result<GeometryResolver<G>, EcoRouteError> {
        Ok(GeometryResolver {
            geocoder,
            endpoints: SummaryEndpoints::new()?,
            map,
        })
    }

    pub async fn resolve(&self, option: &RouteOption) -> RenderPlan {
        match option.geometry() {
            Some(positions) if !positions.is_empty() => {
                match self.precise_path(option, positions) {
                    Ok(plan) => plan,
                    Err(e) => {
                        log::warn!("cannot draw {} route geometry: {e}", option.mode());
                        self.default_plan()
                    }
                }
            }
            _ => match self.derived_endpoints(option).await {
                Some(plan) => plan,
                None => self.default_plan(),
            },
        }
    }

    /// tier 1: the path as reported, with its first and last positions as anchors
    pub fn precise_path(
        &self,
        option: &RouteOption,
        positions: &[Position],
    ) -> Result<RenderPlan, RouteOptionError> {
        let path = geo_utils::try_linestring(positions)?;
        let bounds = geo_utils::bounds_of_line(&path).ok_or_else(|| {
            RouteOptionError::InvalidGeometry(String::from("path has no bounds"))
        })?;
        let (first, last) = match (path.points().next(), path.points().last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(RouteOptionError::InvalidGeometry(String::from(
                    "path has no points",
                )))
            }
        };
        Ok(RenderPlan::Resolved {
            style: self.map.path_style(option),
            start: Anchor::start(first, "Start Point"),
            end: Anchor::end(last, "End Point"),
            path,
            bounds,
        })
    }

    /// tier 2: geocode the names in the route summary. None when the summary
    /// does not name both endpoints, or when geocoding fails.
    async fn derived_endpoints(&self, option: &RouteOption) -> Option<RenderPlan> {
        let Some((origin, destination)) = self.endpoints.parse(option.route_summary()) else {
            log::warn!(
                "no route geometry and no endpoints in summary '{}'",
                option.route_summary()
            );
            return None;
        };
        let names = [origin, destination];
        match self.geocoder.geocode(&names).await {
            Ok(pair) => {
                let [origin, destination] = names;
                Some(degraded_plan(pair.origin, &origin, pair.destination, &destination))
            }
            Err(e) => {
                log::error!("could not resolve coordinates for {names:?}: {e}");
                None
            }
        }
    }

    /// tier 3
    pub fn default_plan(&self) -> RenderPlan {
        RenderPlan::Default(self.map.default_viewport())
    }
}

fn degraded_plan(
    origin_point: Point<f64>,
    origin: &str,
    destination_point: Point<f64>,
    destination: &str,
) -> RenderPlan {
    RenderPlan::Degraded {
        origin: Anchor::start(origin_point, origin),
        destination: Anchor::end(destination_point, destination),
        bounds: geo_utils::bounds_of_pair(origin_point, destination_point),
        notice: String::from(DEGRADED_NOTICE),
    }
}
