use chrono::{DateTime, Utc};
use ecoroute_core::model::{prepend_bounded, RouteOption, SelectionHistoryEntry};

use super::HistoryStore;

/// appends confirmed selections to the recent history. storage problems never
/// reach the caller: an unreadable history is treated as empty, and a failed
/// write is logged and dropped.
pub struct SelectionRecorder;

impl SelectionRecorder {
    /// records the selection and returns the history as it should now read,
    /// whether or not it could be persisted.
    pub fn record<H: HistoryStore + ?Sized>(
        store: &mut H,
        option: &RouteOption,
        now: DateTime<Utc>,
    ) -> Vec<SelectionHistoryEntry> {
        let previous = store.read_all().unwrap_or_else(|e| {
            log::warn!("could not read selection history, starting a new one: {e}");
            vec![]
        });
        let history = prepend_bounded(previous, SelectionHistoryEntry::new(option, now));
        if let Err(e) = store.write_all(&history) {
            log::warn!("could not save selection history: {e}");
        }
        history
    }
}
