use std::path::Path;

use crate::{
    config::ServiceConfig,
    service::{
        HttpRouteQueryService, LocalRouteSource, RouteQuery, RouteQueryResponse, RouteQueryService,
    },
    EcoRouteError,
};

/// where the CLI gets route options from
pub enum RouteSource {
    Http(HttpRouteQueryService),
    Local(LocalRouteSource),
}

impl RouteSource {
    /// a saved response when `local_source` is given, otherwise the configured service
    pub fn new(
        service: &ServiceConfig,
        local_source: Option<&Path>,
    ) -> Result<RouteSource, EcoRouteError> {
        match local_source {
            Some(path) => Ok(RouteSource::Local(LocalRouteSource::new(path))),
            None => Ok(RouteSource::Http(HttpRouteQueryService::try_from(service)?)),
        }
    }
}

impl RouteQueryService for RouteSource {
    async fn query(&self, query: &RouteQuery) -> Result<RouteQueryResponse, EcoRouteError> {
        match self {
            RouteSource::Http(service) => service.query(query).await,
            RouteSource::Local(source) => source.query(query).await,
        }
    }
}
