//! Submissions and the read path
//!
//! - [`SubmissionHandler`]: untrusted body in, committed record out
//! - [`sanitize`]: transport checks, required fields, coercion
//! - [`queries`]: list and lookup

pub mod errors;
pub mod handler;
pub mod queries;
pub mod sanitize;

pub use errors::{SubmissionError, SubmissionResult};
pub use handler::{SubmissionHandler, SubmitReceipt};
pub use queries::{get_by_id, list_all, RecordList};
pub use sanitize::REQUIRED_FIELDS;
