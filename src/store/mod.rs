//! Record persistence
//!
//! The whole collection lives in one JSON file and is rewritten on every
//! mutation. Handlers only see the [`RecordStore`] trait.
//!
//! # Read/write policy
//!
//! - Reads degrade to an empty collection when the file is missing or
//!   corrupt ([`RecordStore::load_all`]), and log the degraded read.
//! - Writes never degrade: [`RecordStore::append`] loads strictly, so a
//!   corrupt file fails the submission instead of being replaced.

mod backend;
mod errors;
mod file_store;
mod record;

pub use backend::RecordStore;
pub use errors::{StoreError, StoreResult};
pub use file_store::{JsonFileStore, DEFAULT_DATA_FILE};
pub use record::{max_id, NewRecord, Record};
