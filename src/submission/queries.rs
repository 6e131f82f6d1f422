//! # Read Path
//!
//! Listing and lookup over the store. Reads use the degrading
//! [`RecordStore::load_all`], so a broken data file looks like an empty one.

use super::errors::{SubmissionError, SubmissionResult};
use crate::observability::{Event, Logger};
use crate::store::{Record, RecordStore};

/// Every persisted record, in insertion order
#[derive(Debug, Clone)]
pub struct RecordList {
    pub count: usize,
    pub records: Vec<Record>,
}

/// List all records with their count
pub fn list_all(store: &dyn RecordStore) -> RecordList {
    let records = store.load_all();
    let count = records.len();
    Logger::info(Event::DataListed, &[("count", &count.to_string())]);
    RecordList { count, records }
}

/// First record whose id matches
pub fn get_by_id(store: &dyn RecordStore, id: u64) -> SubmissionResult<Record> {
    match store.load_all().into_iter().find(|r| r.id == id) {
        Some(record) => {
            Logger::info(Event::DataFetched, &[("id", &id.to_string())]);
            Ok(record)
        }
        None => {
            Logger::warn(Event::DataNotFound, &[("id", &id.to_string())]);
            Err(SubmissionError::NotFound(id))
        }
    }
}
