use std::path::{Path, PathBuf};

use ecoroute_core::model::SelectionHistoryEntry;

use crate::EcoRouteError;

/// name under which the selection history is persisted
pub const HISTORY_KEY: &str = "routeHistory";

/// persistent storage for the recent selection history, most recent first.
/// the whole history is read and written as one value.
pub trait HistoryStore {
    fn read_all(&self) -> Result<Vec<SelectionHistoryEntry>, EcoRouteError>;
    fn write_all(&mut self, entries: &[SelectionHistoryEntry]) -> Result<(), EcoRouteError>;
}

/// history kept as a JSON array in `{directory}/routeHistory.json`
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(directory: &Path) -> JsonFileHistoryStore {
        JsonFileHistoryStore {
            path: directory.join(format!("{HISTORY_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    /// a missing file is an empty history
    fn read_all(&self) -> Result<Vec<SelectionHistoryEntry>, EcoRouteError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| EcoRouteError::ReadError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| EcoRouteError::ReadError {
            path: self.path.clone(),
            message: format!("stored history is not valid: {e}"),
        })
    }

    fn write_all(&mut self, entries: &[SelectionHistoryEntry]) -> Result<(), EcoRouteError> {
        let contents = serde_json::to_string(entries).map_err(|e| EcoRouteError::WriteError {
            path: self.path.clone(),
            message: format!("failed to serialize history: {e}"),
        })?;
        std::fs::write(&self.path, contents).map_err(|e| EcoRouteError::WriteError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
