use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use ecoroute_core::model::{EcoRating, RouteOption};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{PathStyle, Viewport},
    EcoRouteError,
};

/// environment variables with this prefix override file settings, using "__"
/// between nested keys, e.g. `ECOROUTE_SERVICE__BASE_URL`.
pub const ENV_PREFIX: &str = "ECOROUTE";

/// application configuration. built from defaults, then an optional TOML
/// file, then the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcoRouteConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// where the route query and geocoding services live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub route_path: String,
    pub geocode_path: String,
    pub timeout_seconds: u64,
}

/// map defaults used when no route can be drawn, and route styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// [lon, lat]
    pub default_center: [f64; 2],
    pub default_zoom: u8,
    pub path_weight: u32,
    pub path_opacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// directory holding the recent selections file
    pub directory: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:5000"),
            route_path: String::from("/api/route"),
            geocode_path: String::from("/api/geocode"),
            timeout_seconds: 10,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: [-0.09, 51.505],
            default_zoom: 5,
            path_weight: 4,
            path_opacity: 0.7,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl EcoRouteConfig {
    pub fn load(config_file: Option<&Path>) -> Result<EcoRouteConfig, EcoRouteError> {
        let defaults = Config::try_from(&EcoRouteConfig::default()).map_err(|e| {
            EcoRouteError::InternalError(format!("failure serializing default configuration: {e}"))
        })?;
        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| {
                let source = config_file
                    .map(|p| format!("file '{}'", p.display()))
                    .unwrap_or_else(|| String::from("defaults"));
                EcoRouteError::InvalidConfiguration(format!("{source} produced error: {e}"))
            })?;
        let result: EcoRouteConfig = config
            .try_deserialize()
            .map_err(|e| EcoRouteError::InvalidConfiguration(e.to_string()))?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), EcoRouteError> {
        let [lon, lat] = self.map.default_center;
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(EcoRouteError::InvalidConfiguration(format!(
                "map.default_center must be [lon, lat] within [-180, 180] x [-90, 90], found [{lon}, {lat}]"
            )));
        }
        if !(0.0..=1.0).contains(&self.map.path_opacity) {
            return Err(EcoRouteError::InvalidConfiguration(format!(
                "map.path_opacity must be in range [0, 1], found {}",
                self.map.path_opacity
            )));
        }
        if self.service.timeout_seconds == 0 {
            return Err(EcoRouteError::InvalidConfiguration(String::from(
                "service.timeout_seconds must be positive",
            )));
        }
        Ok(())
    }
}

impl ServiceConfig {
    pub fn route_url(&self) -> String {
        join_url(&self.base_url, &self.route_path)
    }

    pub fn geocode_url(&self) -> String {
        join_url(&self.base_url, &self.geocode_path)
    }

    pub fn build_client(&self) -> Result<reqwest::Client, EcoRouteError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .build()
            .map_err(|e| EcoRouteError::InternalError(format!("failure building HTTP client: {e}")))
    }
}

impl MapConfig {
    pub fn default_viewport(&self) -> Viewport {
        let [lon, lat] = self.default_center;
        Viewport {
            center: Point::new(lon, lat),
            zoom: self.default_zoom,
        }
    }

    /// styles the path of `option` by its travel mode and eco rating
    pub fn path_style(&self, option: &RouteOption) -> PathStyle {
        let mode = option.travel_mode();
        PathStyle {
            color: mode.route_color().to_string(),
            weight: self.path_weight,
            opacity: self.path_opacity,
            icon: mode.icon().to_string(),
            eco_class: EcoRating::from(option).style_class().to_string(),
        }
    }
}

impl HistoryConfig {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
