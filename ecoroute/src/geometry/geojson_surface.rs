use std::path::Path;

use geo::{LineString, Point, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

use super::{Anchor, MapSurface, PathStyle, Viewport};
use crate::EcoRouteError;

/// where the map is looking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapView {
    Bounds(Rect<f64>),
    Center(Viewport),
}

/// a [`MapSurface`] that records what is drawn as a GeoJSON FeatureCollection.
/// the drawn path and anchors become features. the view and any notice are
/// written as foreign members of the collection.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonMapSurface {
    features: Vec<Feature>,
    view: Option<MapView>,
    notice: Option<String>,
}

impl GeoJsonMapSurface {
    pub fn new() -> GeoJsonMapSurface {
        GeoJsonMapSurface::default()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn view(&self) -> Option<&MapView> {
        self.view.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut foreign_members = JsonObject::new();
        match self.view {
            Some(MapView::Bounds(rect)) => {
                let (min, max) = (rect.min(), rect.max());
                foreign_members.insert(
                    String::from("fit_bounds"),
                    json!([[min.x, min.y], [max.x, max.y]]),
                );
            }
            Some(MapView::Center(viewport)) => {
                foreign_members.insert(
                    String::from("view"),
                    json!({
                        "center": [viewport.center.x(), viewport.center.y()],
                        "zoom": viewport.zoom,
                    }),
                );
            }
            None => {}
        }
        if let Some(notice) = &self.notice {
            foreign_members.insert(String::from("notice"), json!(notice));
        }
        FeatureCollection {
            bbox: None,
            features: self.features.clone(),
            foreign_members: if foreign_members.is_empty() {
                None
            } else {
                Some(foreign_members)
            },
        }
    }

    /// writes the collection as pretty-printed GeoJSON
    pub fn write(&self, path: &Path) -> Result<(), EcoRouteError> {
        let contents = serde_json::to_string_pretty(&self.to_feature_collection()).map_err(|e| {
            EcoRouteError::WriteError {
                path: path.to_owned(),
                message: format!("failed to serialize map: {e}"),
            }
        })?;
        std::fs::write(path, contents).map_err(|e| EcoRouteError::WriteError {
            path: path.to_owned(),
            message: e.to_string(),
        })
    }
}

impl MapSurface for GeoJsonMapSurface {
    fn clear_route(&mut self) {
        self.features.clear();
        self.notice = None;
    }

    fn draw_path(&mut self, path: &LineString<f64>, style: &PathStyle) {
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), json!("route"));
        properties.insert(String::from("color"), json!(style.color));
        properties.insert(String::from("weight"), json!(style.weight));
        properties.insert(String::from("opacity"), json!(style.opacity));
        properties.insert(String::from("icon"), json!(style.icon));
        properties.insert(String::from("eco_class"), json!(style.eco_class));
        self.features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(path))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    fn place_anchor(&mut self, anchor: &Anchor) {
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), json!("anchor"));
        properties.insert(String::from("role"), json!(anchor.role));
        properties.insert(String::from("label"), json!(anchor.label));
        self.features.push(Feature {
            bbox: None,
            geometry: Some(point_geometry(anchor.point)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.view = Some(MapView::Bounds(bounds));
    }

    fn set_view(&mut self, viewport: &Viewport) {
        self.view = Some(MapView::Center(*viewport));
    }

    fn show_notice(&mut self, notice: &str) {
        self.notice = Some(notice.to_string());
    }
}

fn point_geometry(point: Point<f64>) -> Geometry {
    Geometry::new(geojson::Value::Point(vec![point.x(), point.y()]))
}
