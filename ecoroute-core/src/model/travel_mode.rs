use serde::{Deserialize, Serialize};

/// the transportation modes compared by ecoroute. upstream services may send
/// any mode tag; anything outside of the known set is [`TravelMode::Unknown`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
    Unknown,
}

impl TravelMode {
    /// reads a mode tag, ignoring case and surrounding whitespace.
    /// "cycling" and "walking" are accepted as aliases of bike and walk.
    pub fn from_tag(tag: &str) -> TravelMode {
        match tag.trim().to_lowercase().as_str() {
            "car" => TravelMode::Car,
            "bus" => TravelMode::Bus,
            "train" => TravelMode::Train,
            "bike" | "cycling" => TravelMode::Bike,
            "walk" | "walking" => TravelMode::Walk,
            _ => TravelMode::Unknown,
        }
    }

    /// stroke color used when drawing a route of this mode
    pub fn route_color(&self) -> &'static str {
        match self {
            TravelMode::Walk => "#4CAF50",
            TravelMode::Bike => "#2196F3",
            TravelMode::Car => "#F44336",
            TravelMode::Bus => "#FF9800",
            TravelMode::Train => "#9C27B0",
            TravelMode::Unknown => "#666",
        }
    }

    /// font-awesome icon name for this mode
    pub fn icon(&self) -> &'static str {
        match self {
            TravelMode::Car => "fa-car",
            TravelMode::Bus => "fa-bus",
            TravelMode::Train => "fa-train",
            TravelMode::Bike => "fa-bicycle",
            TravelMode::Walk => "fa-walking",
            TravelMode::Unknown => "fa-route",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelMode::Car => "car",
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Bike => "bike",
            TravelMode::Walk => "walk",
            TravelMode::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}
