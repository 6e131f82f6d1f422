//! # Submission Handler
//!
//! Validate, sanitize, assign identity, persist. Validation always finishes
//! before the store is touched, so a rejected body never writes anything.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::errors::{SubmissionError, SubmissionResult};
use super::sanitize::{into_fields, parse_body, sanitize, Fields};
use crate::observability::{Event, Logger};
use crate::store::{Record, RecordStore};

/// Outcome of a committed submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    pub id: u64,
    pub record: Record,
}

/// Accepts untrusted submissions and commits them to a store
#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    store: Arc<dyn RecordStore>,
}

impl SubmissionHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Backing store, shared with the read path
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Submit a raw request body with its declared content type
    pub fn submit(
        &self,
        body: &[u8],
        content_type: Option<&str>,
    ) -> SubmissionResult<SubmitReceipt> {
        let fields = parse_body(body, content_type).map_err(log_rejection)?;
        self.submit_fields(&fields)
    }

    /// Submit an already-parsed JSON body
    pub fn submit_value(&self, value: Value) -> SubmissionResult<SubmitReceipt> {
        let fields = into_fields(value).map_err(log_rejection)?;
        self.submit_fields(&fields)
    }

    fn submit_fields(&self, fields: &Fields) -> SubmissionResult<SubmitReceipt> {
        let draft = sanitize(fields, Utc::now()).map_err(log_rejection)?;

        match self.store.append(draft) {
            Ok(record) => {
                Logger::info(
                    Event::SubmissionAccepted,
                    &[("id", &record.id.to_string()), ("title", &record.title)],
                );
                Ok(SubmitReceipt {
                    id: record.id,
                    record,
                })
            }
            Err(e) => {
                Logger::error(
                    Event::SubmissionStorageFailed,
                    &[("error", &e.to_string())],
                );
                Err(SubmissionError::StorageError(e))
            }
        }
    }
}

fn log_rejection(err: SubmissionError) -> SubmissionError {
    Logger::warn(
        Event::SubmissionRejected,
        &[("kind", err.kind()), ("reason", &err.detail())],
    );
    err
}
