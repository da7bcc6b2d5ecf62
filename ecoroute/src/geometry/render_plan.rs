use geo::{LineString, Point, Rect};
use serde::{Deserialize, Serialize};

use super::MapSurface;

/// shown when a route is drawn from its endpoints only
pub const DEGRADED_NOTICE: &str =
    "Detailed route map not available. Showing start and end points.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorRole {
    Start,
    End,
}

/// a labelled marker at one end of a route
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub role: AnchorRole,
    pub point: Point<f64>,
    pub label: String,
}

impl Anchor {
    pub fn start(point: Point<f64>, label: &str) -> Anchor {
        Anchor {
            role: AnchorRole::Start,
            point,
            label: label.to_string(),
        }
    }

    pub fn end(point: Point<f64>, label: &str) -> Anchor {
        Anchor {
            role: AnchorRole::End,
            point,
            label: label.to_string(),
        }
    }
}

/// how a precise path is drawn. `icon` and `eco_class` tag the path with the
/// option's travel mode and eco rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub icon: String,
    pub eco_class: String,
}

/// a map center with zoom level. center is (x = lon, y = lat).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Point<f64>,
    pub zoom: u8,
}

/// which fallback level produced a [`RenderPlan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryTier {
    Precise,
    DerivedEndpoints,
    DefaultViewport,
}

impl std::fmt::Display for GeometryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GeometryTier::Precise => "precise",
            GeometryTier::DerivedEndpoints => "derived_endpoints",
            GeometryTier::DefaultViewport => "default_viewport",
        };
        write!(f, "{s}")
    }
}

/// what to draw for a selected route option
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// the full path reported by the routing service
    Resolved {
        path: LineString<f64>,
        style: PathStyle,
        start: Anchor,
        end: Anchor,
        bounds: Rect<f64>,
    },
    /// only the two endpoints, found by geocoding the route summary
    Degraded {
        origin: Anchor,
        destination: Anchor,
        bounds: Rect<f64>,
        notice: String,
    },
    /// nothing to draw
    Default(Viewport),
}

impl RenderPlan {
    pub fn tier(&self) -> GeometryTier {
        match self {
            RenderPlan::Resolved { .. } => GeometryTier::Precise,
            RenderPlan::Degraded { .. } => GeometryTier::DerivedEndpoints,
            RenderPlan::Default(_) => GeometryTier::DefaultViewport,
        }
    }

    pub fn draw_on<S: MapSurface + ?Sized>(&self, surface: &mut S) {
        match self {
            RenderPlan::Resolved {
                path,
                style,
                start,
                end,
                bounds,
            } => {
                surface.draw_path(path, style);
                surface.place_anchor(start);
                surface.place_anchor(end);
                surface.fit_bounds(*bounds);
            }
            RenderPlan::Degraded {
                origin,
                destination,
                bounds,
                notice,
            } => {
                surface.place_anchor(origin);
                surface.place_anchor(destination);
                surface.fit_bounds(*bounds);
                surface.show_notice(notice);
            }
            RenderPlan::Default(viewport) => surface.set_view(viewport),
        }
    }
}
