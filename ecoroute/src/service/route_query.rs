use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{config::ServiceConfig, EcoRouteError};

/// a request for transportation options between two named places
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    origin: String,
    destination: String,
}

impl RouteQuery {
    /// both names are required. surrounding whitespace is removed.
    pub fn new(origin: &str, destination: &str) -> Result<RouteQuery, EcoRouteError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(EcoRouteError::InvalidUserInput(String::from(
                "Origin and destination are required.",
            )));
        }
        Ok(RouteQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// response body of the route query service. route records are kept as raw
/// JSON; they are only trusted after normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQueryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub options: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// the backend that computes route options. implementations report
/// transport problems as errors; the session turns both errors and
/// `success: false` into "no routes available".
pub trait RouteQueryService {
    fn query(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteQueryResponse, EcoRouteError>> + Send;
}

/// route query service reached over HTTP, `GET {route_url}?origin=..&destination=..`
#[derive(Debug, Clone)]
pub struct HttpRouteQueryService {
    client: reqwest::Client,
    url: String,
}

impl HttpRouteQueryService {
    pub fn new(client: reqwest::Client, url: String) -> HttpRouteQueryService {
        HttpRouteQueryService { client, url }
    }
}

impl TryFrom<&ServiceConfig> for HttpRouteQueryService {
    type Error = EcoRouteError;

    fn try_from(value: &ServiceConfig) -> Result<Self, Self::Error> {
        Ok(HttpRouteQueryService::new(
            value.build_client()?,
            value.route_url(),
        ))
    }
}

impl RouteQueryService for HttpRouteQueryService {
    async fn query(&self, query: &RouteQuery) -> Result<RouteQueryResponse, EcoRouteError> {
        log::debug!(
            "requesting routes from '{}' to '{}' at {}",
            query.origin(),
            query.destination(),
            self.url
        );
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("origin", query.origin()),
                ("destination", query.destination()),
            ])
            .send()
            .await
            .map_err(|e| EcoRouteError::RouteQueryFailed(format!("request to {} failed: {e}", self.url)))?
            .error_for_status()
            .map_err(|e| EcoRouteError::RouteQueryFailed(format!("HTTP error: {e}")))?;
        response
            .json::<RouteQueryResponse>()
            .await
            .map_err(|e| EcoRouteError::RouteQueryFailed(format!("failed to read response body: {e}")))
    }
}
