//! # Record Store Trait

use super::errors::StoreResult;
use super::record::{NewRecord, Record};
use crate::observability::{Event, Logger};

/// Whole-collection persistence of records
pub trait RecordStore: Send + Sync + std::fmt::Debug {
    /// Read the collection, failing on unreadable or corrupt data
    fn try_load_all(&self) -> StoreResult<Vec<Record>>;

    /// Replace the persisted collection
    fn save_all(&self, records: &[Record]) -> StoreResult<()>;

    /// Id the next appended record would receive
    fn next_id(&self) -> u64;

    /// Assign an id to `draft`, append it and persist, as one exclusive step
    fn append(&self, draft: NewRecord) -> StoreResult<Record>;

    /// Read the collection, degrading to empty on failure
    fn load_all(&self) -> Vec<Record> {
        match self.try_load_all() {
            Ok(records) => records,
            Err(e) => {
                Logger::warn(Event::StoreDegradedRead, &[("error", &e.to_string())]);
                Vec::new()
            }
        }
    }
}
