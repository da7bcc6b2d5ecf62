use std::path::{Path, PathBuf};

use super::{RouteQuery, RouteQueryResponse, RouteQueryService};
use crate::EcoRouteError;

/// serves a route query response previously saved to disk. the query's
/// origin and destination are not checked against the stored response.
#[derive(Debug, Clone)]
pub struct LocalRouteSource {
    path: PathBuf,
}

impl LocalRouteSource {
    pub fn new(path: &Path) -> LocalRouteSource {
        LocalRouteSource {
            path: path.to_owned(),
        }
    }

    pub fn read(&self) -> Result<RouteQueryResponse, EcoRouteError> {
        let contents = std::fs::read(&self.path).map_err(|e| EcoRouteError::ReadError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_slice::<RouteQueryResponse>(&contents).map_err(|e| {
            EcoRouteError::ReadError {
                path: self.path.clone(),
                message: format!("failed to deserialize from JSON: {e}"),
            }
        })
    }
}

impl RouteQueryService for LocalRouteSource {
    async fn query(&self, query: &RouteQuery) -> Result<RouteQueryResponse, EcoRouteError> {
        log::info!(
            "serving routes from '{}' to '{}' from local source {}",
            query.origin(),
            query.destination(),
            self.path.display()
        );
        self.read()
    }
}
