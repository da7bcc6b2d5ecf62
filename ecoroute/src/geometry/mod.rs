mod geojson_surface;
mod map_surface;
mod render_plan;
mod resolver;
mod summary_endpoints;

pub use geojson_surface::{GeoJsonMapSurface, MapView};
pub use map_surface::MapSurface;
pub use render_plan::{
    Anchor, AnchorRole, GeometryTier, PathStyle, RenderPlan, Viewport, DEGRADED_NOTICE,
};
pub use resolver::GeometryResolver;
pub use summary_endpoints::SummaryEndpoints;
