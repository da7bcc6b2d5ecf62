mod ecoroute_app;
mod report;
mod route_source;

pub use ecoroute_app::{EcoRouteApp, EcoRouteOperation};
pub use report::{format_history, format_options, format_summary, NO_ROUTES_MESSAGE};
pub use route_source::RouteSource;
