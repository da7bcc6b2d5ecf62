use serde::Serialize;
use serde_json::Value;

use super::TravelMode;

/// placeholder summary for records that arrive without one
pub const MISSING_SUMMARY: &str = "No summary available";
/// mode tag for records that arrive without a usable mode
pub const UNKNOWN_MODE: &str = "unknown";

/// a [lon, lat] pair as it arrived from the routing service. arity and range
/// are validated when the geometry is drawn, not here.
pub type Position = Vec<f64>;

// upstream services have used both names for these fields. the first one
// present on a record wins.
const SAVINGS_PERCENTAGE_FIELDS: [&str; 2] = ["carbon_saved_percentage", "savings_percentage"];
const EMISSIONS_SAVED_FIELDS: [&str; 2] = ["emissions_saved_kg", "carbon_saved_kg"];

/// one transportation alternative between an origin and a destination, in
/// canonical form. the only way to build one is [`RouteOption::from_raw`],
/// so every numeric field is finite and the mode tag is never empty.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RouteOption {
    mode: String,
    duration_minutes: f64,
    distance_km: f64,
    cost_estimate: f64,
    emissions_kg: f64,
    emissions_saved_kg: f64,
    savings_percentage: f64,
    route_summary: String,
    geometry: Option<Vec<Position>>,
}

impl RouteOption {
    /// sanitizes one raw route record of unknown shape. missing or invalid
    /// fields are replaced with defaults; this never fails.
    ///
    /// # Defaults
    ///   - mode: "unknown" when missing, not a string, or blank
    ///   - duration, distance, cost, absolute emissions: 0 when missing, not a
    ///     finite number, or negative
    ///   - emissions saved, savings percentage: 0 when missing or not a finite
    ///     number. negative values are kept, so emissions saved is the one
    ///     amount that may be signed; a route that emits more than the
    ///     baseline reports a negative saving.
    ///   - route summary: [`MISSING_SUMMARY`]
    ///   - geometry: an array of positions, either bare or wrapped in a
    ///     `{ "coordinates": [...] }` object. a `coordinates` member that is
    ///     set but not an array is kept as a single empty position, which
    ///     cannot be drawn. anything else is absent.
    pub fn from_raw(raw: &Value) -> RouteOption {
        let mode = match raw.get("mode").and_then(Value::as_str).map(str::trim) {
            Some(m) if !m.is_empty() => m.to_lowercase(),
            _ => {
                log::debug!("route record has no usable mode, using '{UNKNOWN_MODE}'");
                String::from(UNKNOWN_MODE)
            }
        };
        let route_summary = match raw.get("route_summary").and_then(Value::as_str) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => String::from(MISSING_SUMMARY),
        };

        RouteOption {
            duration_minutes: non_negative(raw, "duration_minutes"),
            distance_km: non_negative(raw, "distance_km"),
            cost_estimate: non_negative(raw, "cost_estimate"),
            emissions_kg: non_negative(raw, "carbon_kg"),
            emissions_saved_kg: finite_or_zero(raw, &EMISSIONS_SAVED_FIELDS),
            savings_percentage: finite_or_zero(raw, &SAVINGS_PERCENTAGE_FIELDS),
            geometry: read_geometry(raw),
            mode,
            route_summary,
        }
    }

    /// normalizes every record in a route query response, keeping their order.
    pub fn from_raw_records(records: &[Value]) -> Vec<RouteOption> {
        records.iter().map(RouteOption::from_raw).collect()
    }

    /// lower-cased mode tag as sent by the routing service
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn travel_mode(&self) -> TravelMode {
        TravelMode::from_tag(&self.mode)
    }

    /// mode tag with its first letter capitalized, for display
    pub fn mode_label(&self) -> String {
        let mut chars = self.mode.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn cost_estimate(&self) -> f64 {
        self.cost_estimate
    }

    /// absolute emissions of this option in kg CO2
    pub fn emissions_kg(&self) -> f64 {
        self.emissions_kg
    }

    /// kg CO2 saved relative to the baseline (driving)
    pub fn emissions_saved_kg(&self) -> f64 {
        self.emissions_saved_kg
    }

    pub fn savings_percentage(&self) -> f64 {
        self.savings_percentage
    }

    pub fn route_summary(&self) -> &str {
        &self.route_summary
    }

    pub fn geometry(&self) -> Option<&[Position]> {
        self.geometry.as_deref()
    }
}

/// first non-null value among the candidate fields
fn first_present<'a>(raw: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .find_map(|field| raw.get(field).filter(|v| !v.is_null()))
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn finite_or_zero(raw: &Value, fields: &[&str]) -> f64 {
    match finite_number(first_present(raw, fields)) {
        Some(v) => v,
        None => {
            log::debug!("route record has no finite value for {fields:?}, using 0");
            0.0
        }
    }
}

fn non_negative(raw: &Value, field: &str) -> f64 {
    match finite_number(raw.get(field)) {
        Some(v) if v >= 0.0 => v,
        _ => {
            log::debug!("route record has no non-negative finite '{field}', using 0");
            0.0
        }
    }
}

fn read_geometry(raw: &Value) -> Option<Vec<Position>> {
    let coordinates = match raw.get("geometry")? {
        array @ Value::Array(_) => array,
        Value::Object(object) => object.get("coordinates")?,
        _ => return None,
    };
    let positions = match coordinates {
        Value::Array(positions) => positions,
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        _ => {
            // present but not a list of positions, so it fails when drawn
            log::debug!("route geometry coordinates are not an array: {coordinates}");
            return Some(vec![vec![]]);
        }
    };
    let positions = positions
        .iter()
        .map(|position| match position.as_array() {
            // non-numeric members become NaN and are rejected when drawn
            Some(values) => values
                .iter()
                .map(|v| v.as_f64().unwrap_or(f64::NAN))
                .collect(),
            None => vec![],
        })
        .collect();
    Some(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_well_formed(option: &RouteOption) {
        assert!(!option.mode().is_empty());
        for v in [
            option.duration_minutes(),
            option.distance_km(),
            option.cost_estimate(),
            option.emissions_kg(),
        ] {
            assert!(v.is_finite() && v >= 0.0, "expected finite non-negative, found {v}");
        }
        assert!(option.emissions_saved_kg().is_finite());
        assert!(option.savings_percentage().is_finite());
    }

    #[test]
    fn test_complete_record() {
        let raw = json!({
            "mode": "Train",
            "duration_minutes": 30,
            "distance_km": 15.0,
            "cost_estimate": 3.5,
            "carbon_kg": 0.615,
            "emissions_saved_kg": 1.785,
            "savings_percentage": 74.4,
            "route_summary": "Take the train from Kigali station to Musanze station",
            "geometry": { "type": "LineString", "coordinates": [[30.06, -1.95], [29.63, -1.5]] }
        });
        let option = RouteOption::from_raw(&raw);
        assert_eq!(option.mode(), "train");
        assert_eq!(option.travel_mode(), TravelMode::Train);
        assert_eq!(option.duration_minutes(), 30.0);
        assert_eq!(option.distance_km(), 15.0);
        assert_eq!(option.cost_estimate(), 3.5);
        assert_eq!(option.emissions_kg(), 0.615);
        assert_eq!(option.emissions_saved_kg(), 1.785);
        assert_eq!(option.savings_percentage(), 74.4);
        assert_eq!(
            option.geometry(),
            Some(&[vec![30.06, -1.95], vec![29.63, -1.5]][..])
        );
    }

    #[test]
    fn test_empty_record_gets_defaults() {
        let option = RouteOption::from_raw(&json!({}));
        assert_well_formed(&option);
        assert_eq!(option.mode(), UNKNOWN_MODE);
        assert_eq!(option.route_summary(), MISSING_SUMMARY);
        assert_eq!(option.duration_minutes(), 0.0);
        assert_eq!(option.savings_percentage(), 0.0);
        assert!(option.geometry().is_none());
    }

    #[test]
    fn test_non_object_record_gets_defaults() {
        for raw in [json!(null), json!(42), json!("car"), json!([1, 2, 3])] {
            let option = RouteOption::from_raw(&raw);
            assert_well_formed(&option);
            assert_eq!(option.mode(), UNKNOWN_MODE);
        }
    }

    #[test]
    fn test_malformed_fields_are_coerced() {
        let raw = json!({
            "mode": "",
            "duration_minutes": "25",
            "distance_km": null,
            "cost_estimate": -4.0,
            "emissions_saved_kg": [1.0],
            "savings_percentage": { "value": 50 },
            "route_summary": 7
        });
        let option = RouteOption::from_raw(&raw);
        assert_well_formed(&option);
        assert_eq!(option.mode(), UNKNOWN_MODE);
        assert_eq!(option.duration_minutes(), 0.0);
        assert_eq!(option.distance_km(), 0.0);
        assert_eq!(option.cost_estimate(), 0.0);
        assert_eq!(option.emissions_saved_kg(), 0.0);
        assert_eq!(option.savings_percentage(), 0.0);
        assert_eq!(option.route_summary(), MISSING_SUMMARY);
    }

    #[test]
    fn test_every_subset_of_missing_fields_is_well_formed() {
        let fields = [
            ("mode", json!("bus")),
            ("duration_minutes", json!(40)),
            ("distance_km", json!(13.2)),
            ("cost_estimate", json!(2.0)),
            ("emissions_saved_kg", json!(1.0)),
            ("savings_percentage", json!(45.3)),
            ("route_summary", json!("Take bus route 42 from A to B")),
        ];
        for mask in 0..(1u32 << fields.len()) {
            let mut raw = serde_json::Map::new();
            for (i, (name, value)) in fields.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    raw.insert(name.to_string(), value.clone());
                } else if i % 2 == 0 {
                    raw.insert(name.to_string(), json!("not a number"));
                }
            }
            assert_well_formed(&RouteOption::from_raw(&Value::Object(raw)));
        }
    }

    #[test]
    fn test_savings_percentage_first_present_wins() {
        let both = json!({ "carbon_saved_percentage": 60.0, "savings_percentage": 10.0 });
        assert_eq!(RouteOption::from_raw(&both).savings_percentage(), 60.0);

        let legacy_zero = json!({ "carbon_saved_percentage": 0, "savings_percentage": 10.0 });
        assert_eq!(RouteOption::from_raw(&legacy_zero).savings_percentage(), 0.0);

        let only_new = json!({ "savings_percentage": 10.0 });
        assert_eq!(RouteOption::from_raw(&only_new).savings_percentage(), 10.0);

        let null_legacy = json!({ "carbon_saved_percentage": null, "savings_percentage": 12.5 });
        assert_eq!(RouteOption::from_raw(&null_legacy).savings_percentage(), 12.5);

        let invalid_legacy = json!({ "carbon_saved_percentage": "high", "savings_percentage": 12.5 });
        assert_eq!(RouteOption::from_raw(&invalid_legacy).savings_percentage(), 0.0);
    }

    #[test]
    fn test_negative_savings_are_kept() {
        let raw = json!({ "emissions_saved_kg": -1.5, "savings_percentage": -5.0 });
        let option = RouteOption::from_raw(&raw);
        assert_eq!(option.emissions_saved_kg(), -1.5);
        assert_eq!(option.savings_percentage(), -5.0);
    }

    #[test]
    fn test_legacy_emissions_saved_name() {
        let raw = json!({ "carbon_saved_kg": 2.4 });
        assert_eq!(RouteOption::from_raw(&raw).emissions_saved_kg(), 2.4);
    }

    #[test]
    fn test_bare_geometry_array() {
        let raw = json!({ "geometry": [[30.06, -1.95], [29.63, -1.5]] });
        let option = RouteOption::from_raw(&raw);
        assert_eq!(option.geometry().map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_empty_geometry_is_kept_empty() {
        let raw = json!({ "geometry": [] });
        assert_eq!(RouteOption::from_raw(&raw).geometry(), Some(&[][..]));
    }

    #[test]
    fn test_unreadable_geometry_is_absent() {
        for geometry in [json!("LINESTRING(0 0, 1 1)"), json!({ "type": "LineString" }), json!(3)] {
            let raw = json!({ "geometry": geometry });
            assert!(RouteOption::from_raw(&raw).geometry().is_none());
        }
    }

    #[test]
    fn test_non_array_coordinates_are_undrawable() {
        for coordinates in [json!("30.06,-1.95;29.63,-1.5"), json!({ "a": 1 }), json!(7)] {
            let raw = json!({ "geometry": { "coordinates": coordinates } });
            let option = RouteOption::from_raw(&raw);
            assert_eq!(option.geometry(), Some(&[vec![]][..]));
        }
    }

    #[test]
    fn test_blank_coordinates_are_absent() {
        for coordinates in [json!(null), json!(""), json!(0), json!(false)] {
            let raw = json!({ "geometry": { "coordinates": coordinates } });
            assert!(RouteOption::from_raw(&raw).geometry().is_none());
        }
    }

    #[test]
    fn test_mode_label() {
        let option = RouteOption::from_raw(&json!({ "mode": "WALKING" }));
        assert_eq!(option.mode(), "walking");
        assert_eq!(option.mode_label(), "Walking");
        assert_eq!(option.travel_mode(), TravelMode::Walk);
    }
}
