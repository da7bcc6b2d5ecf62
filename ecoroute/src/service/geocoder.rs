use std::future::Future;

use ecoroute_core::util::geo_utils;
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{config::ServiceConfig, EcoRouteError};

/// resolved coordinates for an origin and destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodePair {
    pub origin: Point<f64>,
    pub destination: Point<f64>,
}

/// response body of the geocoding service.
/// `{ "success": true, "coordinates": [[lon, lat], [lon, lat]] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GeocodeResponse {
    /// accepts the response only when it reports success and carries exactly
    /// two drawable [lon, lat] positions.
    pub fn into_pair(self) -> Result<GeocodePair, EcoRouteError> {
        if !self.success {
            let reason = self.error.unwrap_or_else(|| String::from("success flag not set"));
            return Err(EcoRouteError::GeocodingFailed(reason));
        }
        let coordinates = self.coordinates.ok_or_else(|| {
            EcoRouteError::GeocodingFailed(String::from("response has no coordinates"))
        })?;
        let points = coordinates
            .as_array()
            .ok_or_else(|| {
                EcoRouteError::GeocodingFailed(format!("coordinates are not an array: {coordinates}"))
            })?
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let position = value
                    .as_array()
                    .and_then(|xs| xs.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
                    .ok_or_else(|| {
                        EcoRouteError::GeocodingFailed(format!(
                            "coordinate {index} is not a list of numbers: {value}"
                        ))
                    })?;
                let coord = geo_utils::try_position_to_coord(index, &position)
                    .map_err(|e| EcoRouteError::GeocodingFailed(e.to_string()))?;
                Ok(Point::from(coord))
            })
            .collect::<Result<Vec<_>, EcoRouteError>>()?;
        match points[..] {
            [origin, destination] => Ok(GeocodePair {
                origin,
                destination,
            }),
            _ => Err(EcoRouteError::GeocodingFailed(format!(
                "expected 2 coordinates, found {}",
                points.len()
            ))),
        }
    }
}

/// resolves place names to coordinates. used by the geometry resolver when a
/// route has no precise geometry.
pub trait Geocoder {
    /// looks up the given names, in order. implementations only succeed with
    /// a usable pair of points.
    fn geocode(
        &self,
        location_names: &[String],
    ) -> impl Future<Output = Result<GeocodePair, EcoRouteError>> + Send;
}

/// geocoding service reached over HTTP,
/// `GET {geocode_url}?location=<origin>&location=<destination>`. each name is
/// its own encoded `location` parameter, so names may contain commas.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    client: reqwest::Client,
    url: String,
}

impl HttpGeocoder {
    pub fn new(client: reqwest::Client, url: String) -> HttpGeocoder {
        HttpGeocoder { client, url }
    }

    /// the lookup request for `location_names`, one `location` parameter per name
    pub fn build_request(&self, location_names: &[String]) -> Result<reqwest::Request, EcoRouteError> {
        let params = location_names
            .iter()
            .map(|name| ("location", name.as_str()))
            .collect::<Vec<_>>();
        self.client
            .get(&self.url)
            .query(&params)
            .build()
            .map_err(|e| EcoRouteError::GeocodingFailed(format!("invalid request to {}: {e}", self.url)))
    }
}

impl TryFrom<&ServiceConfig> for HttpGeocoder {
    type Error = EcoRouteError;

    fn try_from(value: &ServiceConfig) -> Result<Self, Self::Error> {
        Ok(HttpGeocoder::new(value.build_client()?, value.geocode_url()))
    }
}

impl Geocoder for HttpGeocoder {
    async fn geocode(&self, location_names: &[String]) -> Result<GeocodePair, EcoRouteError> {
        let request = self.build_request(location_names)?;
        log::debug!("geocoding {location_names:?} at {}", self.url);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| EcoRouteError::GeocodingFailed(format!("request to {} failed: {e}", self.url)))?
            .error_for_status()
            .map_err(|e| EcoRouteError::GeocodingFailed(format!("HTTP error: {e}")))?;
        let body = response
            .json::<GeocodeResponse>()
            .await
            .map_err(|e| EcoRouteError::GeocodingFailed(format!("failed to read response body: {e}")))?;
        body.into_pair()
    }
}
