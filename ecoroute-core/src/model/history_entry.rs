use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RouteOption;

/// number of confirmed selections kept in the recent history
pub const HISTORY_CAPACITY: usize = 5;

/// a confirmed route selection. aliases accept histories written with the
/// older short field names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SelectionHistoryEntry {
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    pub mode: String,
    #[serde(alias = "distance")]
    pub distance_km: f64,
    #[serde(alias = "saved")]
    pub emissions_saved_kg: f64,
}

impl SelectionHistoryEntry {
    pub fn new(option: &RouteOption, timestamp: DateTime<Utc>) -> SelectionHistoryEntry {
        SelectionHistoryEntry {
            timestamp,
            mode: option.mode().to_string(),
            distance_km: option.distance_km(),
            emissions_saved_kg: option.emissions_saved_kg(),
        }
    }
}

/// places the entry at the front of a most-recent-first history and drops
/// anything past [`HISTORY_CAPACITY`].
pub fn prepend_bounded(
    mut history: Vec<SelectionHistoryEntry>,
    entry: SelectionHistoryEntry,
) -> Vec<SelectionHistoryEntry> {
    history.insert(0, entry);
    history.truncate(HISTORY_CAPACITY);
    history
}
