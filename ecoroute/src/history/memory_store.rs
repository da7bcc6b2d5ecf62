use std::path::PathBuf;

use ecoroute_core::model::SelectionHistoryEntry;

use super::{HistoryStore, HISTORY_KEY};
use crate::EcoRouteError;

/// history held in memory. reads or writes can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: Vec<SelectionHistoryEntry>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryHistoryStore {
    pub fn new(entries: Vec<SelectionHistoryEntry>) -> InMemoryHistoryStore {
        InMemoryHistoryStore {
            entries,
            ..Default::default()
        }
    }

    pub fn with_failing_reads(mut self) -> InMemoryHistoryStore {
        self.fail_reads = true;
        self
    }

    pub fn with_failing_writes(mut self) -> InMemoryHistoryStore {
        self.fail_writes = true;
        self
    }

    pub fn entries(&self) -> &[SelectionHistoryEntry] {
        &self.entries
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn read_all(&self) -> Result<Vec<SelectionHistoryEntry>, EcoRouteError> {
        if self.fail_reads {
            return Err(EcoRouteError::ReadError {
                path: PathBuf::from(HISTORY_KEY),
                message: String::from("store unavailable"),
            });
        }
        Ok(self.entries.clone())
    }

    fn write_all(&mut self, entries: &[SelectionHistoryEntry]) -> Result<(), EcoRouteError> {
        if self.fail_writes {
            return Err(EcoRouteError::WriteError {
                path: PathBuf::from(HISTORY_KEY),
                message: String::from("store unavailable"),
            });
        }
        self.entries = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_in_memory_failures() {
        let entry = SelectionHistoryEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 8, 15, 0).unwrap(),
            mode: String::from("car"),
            distance_km: 12.0,
            emissions_saved_kg: 2.1,
        };
        let mut store = InMemoryHistoryStore::new(vec![entry])
            .with_failing_reads()
            .with_failing_writes();
        assert!(store.read_all().is_err());
        assert!(store.write_all(&[]).is_err());
        assert_eq!(store.entries().len(), 1);
    }
}
