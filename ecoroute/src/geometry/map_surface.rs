use geo::{LineString, Rect};

use super::{Anchor, PathStyle, Viewport};

/// the interactive map a route is drawn on. the pipeline only writes to it.
pub trait MapSurface {
    /// removes the previously drawn route, its anchors and any notice
    fn clear_route(&mut self);
    fn draw_path(&mut self, path: &LineString<f64>, style: &PathStyle);
    fn place_anchor(&mut self, anchor: &Anchor);
    fn fit_bounds(&mut self, bounds: Rect<f64>);
    fn set_view(&mut self, viewport: &Viewport);
    /// a visible message telling the user the map is showing less than a full route
    fn show_notice(&mut self, notice: &str);
}
