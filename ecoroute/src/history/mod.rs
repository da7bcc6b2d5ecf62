#[cfg(test)]
mod memory_store;
mod recorder;
mod store;

#[cfg(test)]
pub(crate) use memory_store::InMemoryHistoryStore;
pub use recorder::SelectionRecorder;
pub use store::{HistoryStore, JsonFileHistoryStore, HISTORY_KEY};
