use std::path::PathBuf;

use ecoroute_core::model::RouteOptionError;

#[derive(thiserror::Error, Debug)]
pub enum EcoRouteError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Route query failed: {0}")]
    RouteQueryFailed(String),
    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),
    #[error("Error creating a runtime to handle async code: {0}")]
    TokioError(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error(transparent)]
    RouteOption(#[from] RouteOptionError),
    #[error("{0}")]
    InternalError(String),
}
