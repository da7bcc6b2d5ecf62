use geo::{BoundingRect, Coord, LineString, Point, Rect};

use crate::model::{Position, RouteOptionError};

/// converts a [lon, lat] position into a coordinate, rejecting positions that
/// cannot be drawn on a map.
///
/// # Arguments
///
/// * `index`    - position of this value in its geometry, used in error messages
/// * `position` - values as received; extra values (elevation) are ignored
///
/// # Returns
///
/// * the coordinate with x = longitude, y = latitude
pub fn try_position_to_coord(index: usize, position: &[f64]) -> Result<Coord<f64>, RouteOptionError> {
    let (lon, lat) = match position {
        [lon, lat, ..] => (*lon, *lat),
        _ => {
            return Err(RouteOptionError::PositionArity {
                index,
                arity: position.len(),
            })
        }
    };
    if !lon.is_finite() || !lat.is_finite() {
        return Err(RouteOptionError::NonFinitePosition { index, lon, lat });
    }
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(RouteOptionError::PositionOutOfRange { index, lon, lat });
    }
    Ok(Coord { x: lon, y: lat })
}

/// builds a drawable line from a sequence of positions. fails on the first
/// position that cannot be drawn, or when there are no positions at all.
pub fn try_linestring(positions: &[Position]) -> Result<LineString<f64>, RouteOptionError> {
    if positions.is_empty() {
        return Err(RouteOptionError::InvalidGeometry(String::from(
            "geometry has no positions",
        )));
    }
    let coords = positions
        .iter()
        .enumerate()
        .map(|(index, p)| try_position_to_coord(index, p))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}

/// bounds that contain both points
pub fn bounds_of_pair(a: Point<f64>, b: Point<f64>) -> Rect<f64> {
    Rect::new(a.0, b.0)
}

/// bounds of a line, or None if the line is empty
pub fn bounds_of_line(line: &LineString<f64>) -> Option<Rect<f64>> {
    line.bounding_rect()
}
