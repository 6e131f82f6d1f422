//! Observability events for the collector
//!
//! Every structured log line carries one of these event names.
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// Server is about to bind
    ServerStarting,
    /// Server bound and serving
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Store
    /// Data directory created on first start
    StoreDirCreated,
    /// Empty data file created on first start
    StoreFileCreated,
    /// Read failed and an empty collection was returned instead
    StoreDegradedRead,
    /// Collection could not be written
    StoreSaveFailed,

    // Submissions
    /// Record validated and persisted
    SubmissionAccepted,
    /// Record rejected by validation
    SubmissionRejected,
    /// Record validated but not persisted
    SubmissionStorageFailed,

    // Read path
    /// Health check served
    HealthChecked,
    /// Full collection listed
    DataListed,
    /// Single record fetched
    DataFetched,
    /// Requested record does not exist
    DataNotFound,

    // HTTP boundary
    /// Unexpected failure converted to a generic 500
    InternalError,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::Serving => "COLLECTOR_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::StoreDirCreated => "STORE_DIR_CREATED",
            Event::StoreFileCreated => "STORE_FILE_CREATED",
            Event::StoreDegradedRead => "STORE_DEGRADED_READ",
            Event::StoreSaveFailed => "STORE_SAVE_FAILED",

            Event::SubmissionAccepted => "SUBMISSION_ACCEPTED",
            Event::SubmissionRejected => "SUBMISSION_REJECTED",
            Event::SubmissionStorageFailed => "SUBMISSION_STORAGE_FAILED",

            Event::HealthChecked => "HEALTH_CHECKED",
            Event::DataListed => "DATA_LISTED",
            Event::DataFetched => "DATA_FETCHED",
            Event::DataNotFound => "DATA_NOT_FOUND",

            Event::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::StoreSaveFailed | Event::SubmissionStorageFailed | Event::InternalError
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
