mod geocoder;
mod local_source;
mod route_query;

pub use geocoder::{GeocodePair, GeocodeResponse, Geocoder, HttpGeocoder};
pub use local_source::LocalRouteSource;
pub use route_query::{HttpRouteQueryService, RouteQuery, RouteQueryResponse, RouteQueryService};
