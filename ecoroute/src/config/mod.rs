mod ecoroute_config;

pub use ecoroute_config::{EcoRouteConfig, HistoryConfig, MapConfig, ServiceConfig, ENV_PREFIX};
