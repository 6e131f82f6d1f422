//! # JSON File Store
//!
//! One pretty-printed JSON array per data directory. Every save writes a
//! temporary sibling file, fsyncs it and renames it over the data file, so a
//! reader sees either the old or the new collection, never a partial one.
//!
//! Writers are serialized by `last_assigned`: the mutex is held across the
//! whole load-append-save cycle and remembers the last id handed out, so ids
//! stay unique and never go backwards even if records disappear from disk.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use uuid::Uuid;

use super::backend::RecordStore;
use super::errors::{StoreError, StoreResult};
use super::record::{max_id, NewRecord, Record};
use crate::observability::{Event, Logger};

/// Default file name inside the data directory
pub const DEFAULT_DATA_FILE: &str = "submissions.json";

/// File-backed record store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    last_assigned: Mutex<u64>,
}

impl JsonFileStore {
    /// Open the store, creating the directory and an empty collection if needed.
    ///
    /// Safe to call on every start: an existing data file is never truncated.
    pub fn open(data_dir: impl AsRef<Path>, file_name: &str) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref();

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| StoreError::io(data_dir, e))?;
            Logger::info(
                Event::StoreDirCreated,
                &[("path", &data_dir.display().to_string())],
            );
        }

        let store = Self {
            path: data_dir.join(file_name),
            last_assigned: Mutex::new(0),
        };

        if !store.path.exists() {
            store.save_all(&[])?;
            Logger::info(
                Event::StoreFileCreated,
                &[("path", &store.path.display().to_string())],
            );
        }

        let seed = max_id(&store.load_all());
        *store.last_assigned.lock().map_err(|_| StoreError::LockPoisoned)? = seed;

        Ok(store)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
    }

    fn write_atomically(&self, contents: &[u8]) -> StoreResult<()> {
        let tmp_path = self.temp_path();

        let result = write_synced(&tmp_path, contents).and_then(|_| {
            fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
        });

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> StoreResult<()> {
    let mut file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    file.write_all(contents).map_err(|e| StoreError::io(path, e))?;
    file.sync_all().map_err(|e| StoreError::io(path, e))
}

impl RecordStore for JsonFileStore {
    fn try_load_all(&self) -> StoreResult<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        // A zero-length file holds no records; replacing it loses nothing
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    fn save_all(&self, records: &[Record]) -> StoreResult<()> {
        let result = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialize(e.to_string()))
            .and_then(|json| self.write_atomically(json.as_bytes()));

        if let Err(ref e) = result {
            Logger::error(
                Event::StoreSaveFailed,
                &[
                    ("error", &e.to_string()),
                    ("path", &self.path.display().to_string()),
                ],
            );
        }
        result
    }

    fn next_id(&self) -> u64 {
        let on_disk = max_id(&self.load_all());
        let last = match self.last_assigned.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        };
        on_disk.max(last) + 1
    }

    fn append(&self, draft: NewRecord) -> StoreResult<Record> {
        let mut last = self
            .last_assigned
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        let mut records = self.try_load_all()?;
        let id = max_id(&records).max(*last) + 1;
        let record = draft.into_record(id);
        records.push(record.clone());

        self.save_all(&records)?;
        *last = id;

        Ok(record)
    }
}
