//! Observability for the collector
//!
//! - Structured logging (JSON, one event per line)
//! - Typed lifecycle and request events
//!
//! HTTP request spans go through `tracing` (see `http_server::server`);
//! domain outcomes go through [`Logger`].
//!
//! # Usage
//!
//! ```ignore
//! use collector::observability::{Event, Logger};
//!
//! Logger::info(Event::SubmissionAccepted, &[("id", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event without fields
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields, picking severity from the event
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event, fields);
}
